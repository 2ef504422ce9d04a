mod check;

use crate::Outcome;
pub(crate) use check::CheckCmd;

pub(crate) trait RunCommand: std::fmt::Debug {
    async fn run(self) -> Outcome;
}

#[cfg(test)]
mod tests;
