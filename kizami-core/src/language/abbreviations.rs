//! Built-in abbreviation lists
//!
//! Entries are matched case-insensitively against the token preceding a
//! period; interior periods are significant ("e.g", "z.B").

/// English abbreviations
pub(super) const ENGLISH: &[&str] = &[
    // Titles
    "dr", "mr", "mrs", "ms", "prof", "rev", "hon", "st", "sr", "jr", "capt", "col", "gen", "lt",
    "sgt",
    // Latin shorthand
    "etc", "e.g", "i.e", "cf", "al", "vs", "viz", "approx",
    // Business
    "inc", "ltd", "co", "corp", "dept", "est",
    // References
    "fig", "figs", "no", "nos", "p", "pp", "vol", "ch", "sec", "ed",
    // Geography
    "u.s", "u.s.a", "u.k", "ave", "blvd", "rd", "mt",
    // Months
    "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
];

/// German abbreviations
pub(super) const GERMAN: &[&str] = &[
    "abb", "abs", "bzw", "ca", "d.h", "dr", "evtl", "ggf", "inkl", "mio", "mrd", "nr", "o.ä",
    "prof", "s", "sog", "u.a", "usw", "vgl", "z.b", "z.t",
];

/// French abbreviations
pub(super) const FRENCH: &[&str] = &[
    "av", "dr", "env", "etc", "ex", "m", "mme", "mlle", "p.ex", "st", "ste", "vol",
];
