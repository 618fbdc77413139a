use pdf_writer::{ Name, Ref };

use crate::types::{ FontFamily, Style };

/// one registered Type1 font: its indirect object and the resource name pages use for it
#[derive(Debug)]
pub struct FontReference {
    pub id: Ref,
    pub family: FontFamily,
    pub style: Style,
    pub label: &'static str,
    pub name: Name<'static>,
}

impl FontReference {
    pub fn new(id: Ref, family: FontFamily, style: Style) -> Self {
        FontReference {
            id,
            family,
            style,
            label: family.label(style),
            name: Name(family.base_font(style).as_bytes()),
        }
    }

    /// resource key inside page content streams
    pub fn resource_name(&self) -> Name<'static> {
        Name(self.label.as_bytes())
    }
}
