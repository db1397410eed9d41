use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn folio_cmd() -> Command {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.env_remove("FOLIO_ROOT");
    cmd.env_remove("FOLIO_LOG");
    cmd
}

/// Write `content/<name>.md` under `root`
#[allow(dead_code)]
pub fn write_post(root: &Path, name: &str, frontmatter: &str, body: &str) {
    let path = root.join("content").join(format!("{}.md", name));
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, format!("+++\n{}\n+++\n{}", frontmatter, body)).unwrap();
}
