// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ErrorReport;
use crate::error::fail;

/// The user's self-reported recall quality for one card.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Wrong,
    Forgot,
    Vague,
    Correct,
    Mastered,
}

/// The scheduling branch an outcome falls into. `Wrong`/`Forgot` and
/// `Correct`/`Mastered` are synonyms.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OutcomeClass {
    Wrong,
    Vague,
    Correct,
}

impl Outcome {
    pub fn as_str(&self) -> &str {
        match self {
            Outcome::Wrong => "wrong",
            Outcome::Forgot => "forgot",
            Outcome::Vague => "vague",
            Outcome::Correct => "correct",
            Outcome::Mastered => "mastered",
        }
    }

    pub fn class(&self) -> OutcomeClass {
        match self {
            Outcome::Wrong | Outcome::Forgot => OutcomeClass::Wrong,
            Outcome::Vague => OutcomeClass::Vague,
            Outcome::Correct | Outcome::Mastered => OutcomeClass::Correct,
        }
    }
}

impl FromStr for Outcome {
    type Err = ErrorReport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wrong" => Ok(Outcome::Wrong),
            "forgot" => Ok(Outcome::Forgot),
            "vague" => Ok(Outcome::Vague),
            "correct" => Ok(Outcome::Correct),
            "mastered" => Ok(Outcome::Mastered),
            _ => fail(format!("invalid outcome: {s}")),
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Fallible;

    #[test]
    fn test_parse() -> Fallible<()> {
        assert_eq!("wrong".parse::<Outcome>()?, Outcome::Wrong);
        assert_eq!("forgot".parse::<Outcome>()?, Outcome::Forgot);
        assert_eq!("vague".parse::<Outcome>()?, Outcome::Vague);
        assert_eq!("correct".parse::<Outcome>()?, Outcome::Correct);
        assert_eq!("mastered".parse::<Outcome>()?, Outcome::Mastered);
        Ok(())
    }

    #[test]
    fn test_parse_invalid() {
        let err = "meh".parse::<Outcome>().unwrap_err();
        assert_eq!(err.to_string(), "error: invalid outcome: meh");
    }

    #[test]
    fn test_aliases_share_a_class() {
        assert_eq!(Outcome::Wrong.class(), Outcome::Forgot.class());
        assert_eq!(Outcome::Correct.class(), Outcome::Mastered.class());
        assert_eq!(Outcome::Vague.class(), OutcomeClass::Vague);
    }
}
