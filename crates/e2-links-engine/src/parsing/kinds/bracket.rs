pub struct Bracket;

impl Bracket {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    pub const PIPE: char = '|';

    /// True for any byte that is not a bracket delimiter.
    pub fn is_plain(b: u8) -> bool {
        b != Self::OPEN && b != Self::CLOSE
    }
}
