//! Path construction during recursion.

use std::fmt::Write as _;

use strix_value::Value;

/// A grow/truncate buffer for the dot/bracket-qualified path of the value
/// currently being checked.
///
/// The matcher pushes a segment before descending and resets to the saved
/// mark afterwards, so one buffer serves the whole recursion and failed
/// union probes leave no trace.
pub(crate) struct PathCursor {
    buf: String,
}

impl PathCursor {
    pub(crate) fn new(root: &str) -> Self {
        PathCursor {
            buf: String::from(root),
        }
    }

    /// Current length, to be restored with [`reset`](Self::reset).
    pub(crate) fn mark(&self) -> usize {
        self.buf.len()
    }

    pub(crate) fn reset(&mut self, mark: usize) {
        self.buf.truncate(mark);
    }

    /// `[i]`: position in a list or tuple.
    pub(crate) fn push_index(&mut self, index: usize) {
        let _ = write!(self.buf, "[{index}]");
    }

    /// `[k]`: map entry value, labeled by the literal key. String keys
    /// render bare (`value[b]`, not `value["b"]`).
    pub(crate) fn push_map_key(&mut self, key: &Value) {
        let _ = write!(self.buf, "[{}]", key.display_bare());
    }

    /// `.key`: a map entry's key under inspection.
    pub(crate) fn push_entry_key(&mut self) {
        self.buf.push_str(".key");
    }

    /// `.item`: a set element; sets have no positional index.
    pub(crate) fn push_item(&mut self) {
        self.buf.push_str(".item");
    }

    /// Owned copy, taken when a report is being constructed.
    pub(crate) fn render(&self) -> String {
        self.buf.clone()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn segments_compose_and_reset() {
        let mut path = PathCursor::new("value");
        let root = path.mark();

        path.push_index(2);
        let inner = path.mark();
        path.push_entry_key();
        assert_eq!(path.render(), "value[2].key");

        path.reset(inner);
        path.push_map_key(&Value::str("b"));
        assert_eq!(path.render(), "value[2][b]");

        path.reset(root);
        path.push_item();
        assert_eq!(path.render(), "value.item");
    }
}
