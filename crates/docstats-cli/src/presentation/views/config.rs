use std::fmt;

use crate::presentation::view_models::{ConfigInitViewModel, ConfigViewModel, CreateView};

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigView { data: self })
    }
}

struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.data.exists { "" } else { " (not found, showing defaults)" };
        writeln!(f, "# {}{}", self.data.path, state)?;
        writeln!(f)?;
        write_toml(f, &self.data.config)
    }
}

impl CreateView for ConfigInitViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigInitView { data: self })
    }
}

struct ConfigInitView<'a> {
    data: &'a ConfigInitViewModel,
}

impl<'a> fmt::Display for ConfigInitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.data.overwritten { "Overwrote" } else { "Wrote" };
        writeln!(f, "{} {}", verb, self.data.path)
    }
}

fn write_toml(f: &mut fmt::Formatter<'_>, config: &crate::config::Config) -> fmt::Result {
    match config.to_toml() {
        Ok(text) => write!(f, "{}", text),
        Err(_) => Err(fmt::Error),
    }
}
