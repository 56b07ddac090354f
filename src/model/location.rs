// src/model/location.rs

use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

/// Bin address pattern: `<aisle letters><digits>.C<column>.S<shelf>`, e.g. `BA12.C3.S04`.
static BIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z]+[0-9]+)\.C([0-9]+)\.S([0-9]+)$").unwrap());

/// A location string decoded into a physical bin address where possible.
///
/// Ordering is the walk order used for picking:
/// structured bins come first (aisle, then column, then shelf), and every
/// other string follows in collation order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LocationAddress {
    Structured {
        aisle: String,
        column: u32,
        shelf: u32,
    },
    Unstructured {
        raw: String,
    },
}

impl LocationAddress {
    pub fn parse(location: &str) -> Self {
        if let Some(caps) = BIN_RE.captures(location) {
            // Column/shelf numbers too large for u32 are not real bins.
            if let (Ok(column), Ok(shelf)) = (caps[2].parse(), caps[3].parse()) {
                return LocationAddress::Structured {
                    aisle: caps[1].to_string(),
                    column,
                    shelf,
                };
            }
        }
        LocationAddress::Unstructured {
            raw: location.to_string(),
        }
    }
}

impl Ord for LocationAddress {
    fn cmp(&self, other: &Self) -> Ordering {
        use LocationAddress::*;

        match (self, other) {
            (
                Structured {
                    aisle: a_aisle,
                    column: a_col,
                    shelf: a_shelf,
                },
                Structured {
                    aisle: b_aisle,
                    column: b_col,
                    shelf: b_shelf,
                },
            ) => a_aisle
                .cmp(b_aisle)
                .then(a_col.cmp(b_col))
                .then(a_shelf.cmp(b_shelf)),
            (Structured { .. }, Unstructured { .. }) => Ordering::Less,
            (Unstructured { .. }, Structured { .. }) => Ordering::Greater,
            (Unstructured { raw: a }, Unstructured { raw: b }) => collate(a, b),
        }
    }
}

impl PartialOrd for LocationAddress {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Locale-style comparison of free-text locations.
///
/// Primary level: whitespace, then punctuation, then symbols, then digits,
/// then letters (case-folded). Ties fall back to lowercase-before-uppercase,
/// and finally to the raw bytes so distinct strings never compare equal.
fn collate(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(primary_weight)
        .cmp(b.chars().flat_map(primary_weight))
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

fn primary_weight(c: char) -> impl Iterator<Item = (u8, char)> {
    let class = if c.is_whitespace() {
        0
    } else if c.is_ascii_punctuation() || ('\u{2000}'..='\u{206F}').contains(&c) {
        1
    } else if c.is_numeric() {
        3
    } else if c.is_alphabetic() {
        4
    } else {
        2
    };
    c.to_lowercase().map(move |folded| (class, folded))
}

/// Compares two raw location strings in walk order.
pub fn compare_locations(a: &str, b: &str) -> Ordering {
    LocationAddress::parse(a).cmp(&LocationAddress::parse(b))
}
