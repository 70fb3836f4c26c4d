#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Facing {
    Left,
    Right,
}

impl Facing {
    /// Whether a sprite drawn facing right must be mirrored.
    pub(crate) fn mirrored(self) -> bool {
        matches!(self, Facing::Left)
    }
}
