use crate::types::errors::PageSizeError;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Number of rows requested per page. Only the sizes offered by the console are representable.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub enum PageSize {
    #[default]
    TwentyFive,
    Fifty,
    SeventyFive,
    OneHundred
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [
        PageSize::TwentyFive,
        PageSize::Fifty,
        PageSize::SeventyFive,
        PageSize::OneHundred
    ];

    pub fn get(self) -> u32 {
        match self {
            PageSize::TwentyFive => 25,
            PageSize::Fifty => 50,
            PageSize::SeventyFive => 75,
            PageSize::OneHundred => 100
        }
    }
}

impl TryFrom<u32> for PageSize {
    type Error = PageSizeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        PageSize::ALL.into_iter()
            .find(|size| size.get() == value)
            .ok_or(PageSizeError::Unsupported(value))
    }
}

impl FromStr for PageSize {
    type Err = PageSizeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value: u32 = value.trim().parse()?;
        PageSize::try_from(value)
    }
}

impl Display for PageSize {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.get())
    }
}
