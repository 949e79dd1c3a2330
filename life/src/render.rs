use std::str::FromStr;

use crate::generation::Generation;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Text,
    Html,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Format::Text),
            "html" => Ok(Format::Html),
            _ => Err(format!("Unknown format {s}")),
        }
    }
}

impl Generation {
    pub fn render(&self, format: Format) -> String {
        match format {
            Format::Text => self.board().render("\n"),
            Format::Html => format!("<p>{}</p>", self.board().render("<br>")),
        }
    }
}
