use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Stable identifier for a catalog entry.
///
/// The equipment and item services disagree on id types (integers vs
/// strings), so ids are normalized to their string form on the way in.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
#[serde(transparent)]
pub struct EntryId(pub String);

/// Manufacturer name attached to equipment entries.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Brand(pub String);

/// Storefront category of an entry.
///
/// Known variants match the labels shown in the filter panel; `Other`
/// keeps payloads with new categories loadable. Equality, ordering and
/// hashing go through the label, so `Other("Peça")` is the same value as
/// `Part`.
#[derive(Clone, Debug)]
pub enum Category {
    Equipment,
    Part,
    Product,
    Other(String),
}

/// Condition of the physical item ("Novo", "Semi-novo"). Compared by label,
/// like `Category`.
#[derive(Clone, Debug)]
pub enum ItemState {
    New,
    SemiNew,
    Other(String),
}

impl EntryId {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        EntryId(value.to_string())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl<'de> Deserialize<'de> for EntryId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => EntryId(text),
            RawId::Number(number) => EntryId(number.to_string()),
        })
    }
}

macro_rules! compare_by_label {
    ($ty:ty) => {
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.as_str() == other.as_str()
            }
        }

        impl Eq for $ty {}

        impl PartialOrd for $ty {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $ty {
            fn cmp(&self, other: &Self) -> Ordering {
                self.as_str().cmp(other.as_str())
            }
        }

        impl Hash for $ty {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.as_str().hash(state);
            }
        }
    };
}

compare_by_label!(Category);
compare_by_label!(ItemState);

impl Brand {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_label(&value))
    }
}

impl Category {
    /// Categories offered by the filter panel, in display order.
    pub fn known() -> [Category; 3] {
        [Category::Equipment, Category::Part, Category::Product]
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::Equipment => "Equipamento",
            Category::Part => "Peça",
            Category::Product => "Produto",
            Category::Other(value) => value.as_str(),
        }
    }

    pub fn from_label(value: &str) -> Self {
        match value {
            "Equipamento" => Category::Equipment,
            "Peça" => Category::Part,
            "Produto" => Category::Product,
            other => Category::Other(other.to_string()),
        }
    }
}

impl Serialize for ItemState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ItemState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_label(&value))
    }
}

impl ItemState {
    /// States offered by the filter panel, in display order.
    pub fn known() -> [ItemState; 2] {
        [ItemState::New, ItemState::SemiNew]
    }

    pub fn as_str(&self) -> &str {
        match self {
            ItemState::New => "Novo",
            ItemState::SemiNew => "Semi-novo",
            ItemState::Other(value) => value.as_str(),
        }
    }

    pub fn from_label(value: &str) -> Self {
        match value {
            "Novo" => ItemState::New,
            "Semi-novo" => ItemState::SemiNew,
            other => ItemState::Other(other.to_string()),
        }
    }
}
