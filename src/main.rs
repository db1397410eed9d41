use clap::Parser;
use folio::application::{
    BuildSiteService, ConfigService, InitService, ListPostsService, ListTagsService, PostFilter,
    ShowPostService, ThemeService,
};
use folio::cli::{format_post_details, format_post_list, format_tag_counts, Cli, Commands};
use folio::domain::scroll::scroll_progress;
use folio::domain::Theme;
use folio::error::FolioError;
use folio::infrastructure::FileSystemRepository;
use std::str::FromStr;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("FOLIO_LOG", "warn"))
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), FolioError> {
    match cli.command {
        Commands::Init {
            path,
            title,
            author,
        } => InitService::execute(&path, &title, &author),
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(FileSystemRepository::discover()?);

            if list {
                let config = service.list()?;
                println!("title = {}", config.title);
                println!("description = {}", config.description);
                println!("author = {}", config.author);
                println!("email = {}", config.email);
                println!("base_path = {}", config.base_path);
                println!("home_url = {}", config.home_url);
                println!("words_per_minute = {}", config.words_per_minute);
                println!("theme = {}", config.theme);
                for (label, url) in &config.social {
                    println!("social.{} = {}", label, url);
                }
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: folio config [--list | <key> [<value>]]");
                println!(
                    "Valid keys: title, description, author, email, base_path, home_url, \
                    words_per_minute, theme"
                );
                Ok(())
            }
        }
        Commands::Posts { all, tag, limit } => {
            let service = ListPostsService::new(FileSystemRepository::discover()?);
            let posts = service.execute(&PostFilter {
                include_drafts: all,
                tag,
                limit,
            })?;
            print!("{}", with_trailing_newline(format_post_list(&posts)));
            Ok(())
        }
        Commands::Tags { all } => {
            let service = ListTagsService::new(FileSystemRepository::discover()?);
            let counts = service.execute(all)?;
            print!("{}", with_trailing_newline(format_tag_counts(&counts)));
            Ok(())
        }
        Commands::Show { slug } => {
            let service = ShowPostService::new(FileSystemRepository::discover()?);
            let details = service.execute(&slug)?;
            print!("{}", format_post_details(&details));
            Ok(())
        }
        Commands::Theme { action } => {
            let service = ThemeService::new(FileSystemRepository::discover()?);
            let theme = match action.as_deref() {
                None => service.current()?,
                Some("toggle") => service.toggle()?,
                Some(value) => service.set(Theme::from_str(value).map_err(FolioError::Config)?)?,
            };
            println!("{}", theme);
            Ok(())
        }
        Commands::Build { out } => {
            let service = BuildSiteService::new(FileSystemRepository::discover()?);
            let report = service.execute(out.as_deref())?;
            println!(
                "Built {} pages ({} posts, {} tags) into {}",
                report.pages,
                report.posts,
                report.tags,
                report.out_dir.display()
            );
            Ok(())
        }
        Commands::Progress {
            scroll_top,
            scroll_height,
            client_height,
        } => {
            let percent = scroll_progress(scroll_top, scroll_height, client_height);
            println!("{:.2}%", percent);
            Ok(())
        }
    }
}

fn with_trailing_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
