//! Record type stored by the tree and sorted by the sequence sorts.

/// Types that can be placed in a [`BinarySearchTree`](crate::tree::BinarySearchTree).
///
/// The key is borrowed from the value itself, so a record's identity is its key field.
pub trait Keyed {
    type Key: Ord + ?Sized;

    fn key(&self) -> &Self::Key;
}

/// Types ordered by a title field in the [`sort`](crate::sort) routines.
pub trait Titled {
    fn title(&self) -> &str;
}

/// A keyed record.
///
/// `amount` defaults to `0.0`; record sources that fail to parse an amount hand over the
/// default rather than an error.
///
/// ```rust
/// use rbst::{Keyed, Record, Titled};
///
/// let record = Record::new("98109", "Table", "General Fund", 27.0);
/// assert_eq!(record.key(), "98109");
/// assert_eq!(record.title(), "Table");
/// assert_eq!(Record::keyed("1").amount(), 0.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    key: String,
    title: String,
    category: String,
    #[cfg_attr(feature = "serde", serde(default))]
    amount: f64,
}

impl Record {
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            category: category.into(),
            amount,
        }
    }

    /// A record carrying only its identifier.
    pub fn keyed(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }
}

impl Keyed for Record {
    type Key = str;

    #[inline]
    fn key(&self) -> &str {
        &self.key
    }
}

impl Titled for Record {
    #[inline]
    fn title(&self) -> &str {
        &self.title
    }
}

impl Keyed for String {
    type Key = str;

    #[inline]
    fn key(&self) -> &str {
        self
    }
}

macro_rules! keyed_by_self {
    ($($t:ty),*) => {
        $(
            impl Keyed for $t {
                type Key = $t;

                #[inline]
                fn key(&self) -> &$t {
                    self
                }
            }
        )*
    };
}

keyed_by_self!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char);
