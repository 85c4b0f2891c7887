// MIT/Apache2 License

use std::fmt;

const RENDER_NODE: &str = "RenderNode(id=";
const NAME: &str = ", name='";
const CLOSE: &str = "')";

/// Whether a marker opens or closes a node.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    Begin,
    End,
}

/// The annotation key that brackets the drawing of one render node, e.g.
/// `RenderNode(id=1, name='LinearLayout')` and `/RenderNode(id=1, name='LinearLayout')`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Marker<'a> {
    pub kind: MarkerKind,
    pub id: u64,
    pub name: &'a str,
}

impl<'a> Marker<'a> {
    #[inline]
    pub fn begin(id: u64, name: &'a str) -> Self {
        Self {
            kind: MarkerKind::Begin,
            id,
            name,
        }
    }

    #[inline]
    pub fn end(id: u64, name: &'a str) -> Self {
        Self {
            kind: MarkerKind::End,
            id,
            name,
        }
    }

    /// Parse an annotation key. Returns `None` for keys that are not render node markers.
    pub fn parse(key: &'a str) -> Option<Self> {
        let (kind, rest) = match key.strip_prefix('/') {
            Some(rest) => (MarkerKind::End, rest),
            None => (MarkerKind::Begin, key),
        };

        let rest = rest.strip_prefix(RENDER_NODE)?.strip_suffix(CLOSE)?;
        let split = rest.find(NAME)?;
        let (id, name) = (&rest[..split], &rest[split + NAME.len()..]);

        if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) || name.contains('\'') {
            return None;
        }

        Some(Self {
            kind,
            id: id.parse().ok()?,
            name,
        })
    }
}

impl fmt::Display for Marker<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == MarkerKind::End {
            f.write_str("/")?;
        }
        write!(f, "{}{}{}{}{}", RENDER_NODE, self.id, NAME, self.name, CLOSE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_begin_and_end() {
        assert_eq!(
            Marker::begin(1, "LinearLayout").to_string(),
            "RenderNode(id=1, name='LinearLayout')"
        );
        assert_eq!(
            Marker::end(3, "AppCompatButton").to_string(),
            "/RenderNode(id=3, name='AppCompatButton')"
        );
    }

    #[test]
    fn parses_keys() {
        assert_eq!(
            Marker::parse("/RenderNode(id=4, name='Button')"),
            Some(Marker::end(4, "Button"))
        );
        assert_eq!(
            Marker::parse("RenderNode(id=12, name='FrameLayout')"),
            Some(Marker::begin(12, "FrameLayout"))
        );
    }

    #[test]
    fn ignores_other_keys() {
        assert_eq!(Marker::parse("RenderNode(id=, name='x')"), None);
        assert_eq!(Marker::parse("RenderNode(id=-1, name='x')"), None);
        assert_eq!(Marker::parse("RenderNode(id=1, name='x'"), None);
        assert_eq!(Marker::parse("Link(id=1, name='x')"), None);
        assert_eq!(Marker::parse("//RenderNode(id=1, name='x')"), None);
    }
}
