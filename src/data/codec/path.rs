use std::fmt::{self, Write};

/// Location of a value inside the JSON document being decoded.
///
/// Segments borrow their parent, so descending into a field costs nothing
/// until an error actually needs the rendered path.
#[derive(Debug, Clone, Copy)]
pub enum JsonPath<'a> {
    Root,
    Key(&'a JsonPath<'a>, &'a str),
    Index(&'a JsonPath<'a>, usize),
}

impl JsonPath<'_> {
    pub fn key<'b>(&'b self, key: &'b str) -> JsonPath<'b> {
        JsonPath::Key(self, key)
    }

    pub fn index(&self, index: usize) -> JsonPath<'_> {
        JsonPath::Index(self, index)
    }

    fn write_segments(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            JsonPath::Root => Ok(()),
            JsonPath::Key(parent, key) => {
                parent.write_segments(f)?;
                if !matches!(parent, JsonPath::Root) {
                    f.write_char('.')?;
                }
                f.write_str(key)
            }
            JsonPath::Index(parent, index) => {
                parent.write_segments(f)?;
                write!(f, "[{index}]")
            }
        }
    }
}

impl fmt::Display for JsonPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonPath::Root => f.write_char('$'),
            _ => self.write_segments(f),
        }
    }
}
