use serde::{ Deserialize, Serialize };

/// font weight/slant combination requested from a backend
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Default,Serialize,Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
   #[default]
    Normal,
    Bold,
    Italic,
    BoldItalic,
}
