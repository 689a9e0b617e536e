use strum::IntoEnumIterator;
use strum_macros::{EnumIter, IntoStaticStr};

/// Weather stations offered by the form.
///
/// The trained pipeline may know more stations than these; the list only
/// drives the select control and is never used to reject a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
pub enum Station {
    Albury,
    Sydney,
    Melbourne,
    Canberra,
    Brisbane,
    Adelaide,
    Perth,
    Hobart,
    Darwin,
}

/// The 16 compass-direction codes used by the wind direction columns.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
pub enum CompassPoint {
    N,
    NNE,
    NE,
    ENE,
    E,
    ESE,
    SE,
    SSE,
    S,
    SSW,
    SW,
    WSW,
    W,
    WNW,
    NW,
    NNW,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
pub enum YesNo {
    No,
    Yes,
}

/// Which option list a categorical field is presented with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryList {
    Stations,
    CompassPoints,
    YesNo,
}

impl CategoryList {
    pub fn options(self) -> Vec<&'static str> {
        match self {
            CategoryList::Stations => Station::iter().map(Into::into).collect(),
            CategoryList::CompassPoints => CompassPoint::iter().map(Into::into).collect(),
            CategoryList::YesNo => YesNo::iter().map(Into::into).collect(),
        }
    }
}
