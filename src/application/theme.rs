//! Theme preference use case

use crate::domain::Theme;
use crate::error::Result;
use crate::infrastructure::{BlogRepository, FileSystemRepository};

/// Service for reading and changing the site theme
pub struct ThemeService {
    repository: FileSystemRepository,
}

impl ThemeService {
    pub fn new(repository: FileSystemRepository) -> Self {
        Self { repository }
    }

    pub fn current(&self) -> Result<Theme> {
        Ok(self.repository.load_config()?.theme)
    }

    /// Flip between dark and light, returning the new theme
    pub fn toggle(&self) -> Result<Theme> {
        let current = self.current()?;
        self.set(current.toggle())
    }

    pub fn set(&self, theme: Theme) -> Result<Theme> {
        let mut config = self.repository.load_config()?;
        config.theme = theme;
        self.repository.save_config(&config)?;
        log::debug!("theme set to {}", theme);
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fixtures::blog;

    #[test]
    fn test_default_theme_is_dark() {
        let (_temp, repo) = blog();
        assert_eq!(ThemeService::new(repo).current().unwrap(), Theme::Dark);
    }

    #[test]
    fn test_toggle_persists() {
        let (_temp, repo) = blog();
        let service = ThemeService::new(repo.clone());

        assert_eq!(service.toggle().unwrap(), Theme::Light);
        assert_eq!(repo.load_config().unwrap().theme, Theme::Light);
        assert_eq!(service.toggle().unwrap(), Theme::Dark);
        assert_eq!(service.current().unwrap(), Theme::Dark);
    }

    #[test]
    fn test_set() {
        let (_temp, repo) = blog();
        let service = ThemeService::new(repo);
        service.set(Theme::Light).unwrap();
        assert_eq!(service.current().unwrap(), Theme::Light);
    }
}
