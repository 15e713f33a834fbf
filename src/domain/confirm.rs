//! Yes/no answers to interactive questions.

/// Answer to a yes/no question.
///
/// Matching is case-insensitive and ignores surrounding whitespace. Only
/// `yes` and `no` are recognized; everything else is `Unrecognized` and
/// the question is asked again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Yes,
    No,
    Unrecognized,
}

impl Confirmation {
    pub const AFFIRMATIVE: &'static str = "yes";
    pub const NEGATIVE: &'static str = "no";

    pub fn parse(input: &str) -> Self {
        let answer = input.trim();
        if answer.eq_ignore_ascii_case(Self::AFFIRMATIVE) {
            Confirmation::Yes
        } else if answer.eq_ignore_ascii_case(Self::NEGATIVE) {
            Confirmation::No
        } else {
            Confirmation::Unrecognized
        }
    }
}
