//! Per-attribute importance weights for the catalog scoring path.
//!
//! Higher weight = more discriminating; confirming matches are rewarded
//! proportionally (x(1 + w/10)) while mismatches take a flat penalty.
//! Attributes absent from this table fall back to the configured default.

/// Tuned weights, 3.0-10.0 by discriminative value. A repeated key is a
/// configuration error caught by an assertion when the table is loaded.
pub const ATTRIBUTE_WEIGHTS: &[(&str, f32)] = &[
    ("isDessert", 10.0),
    ("isVegetarian", 9.0),
    ("isSpicy", 8.0),
    ("hasMeat", 7.0),
    ("hasSeafood", 6.0),
    ("isBreakfast", 7.0),
    ("isAsian", 5.0),
    ("isItalian", 5.0),
    ("isMexican", 5.0),
    ("hasChicken", 5.0),
    ("hasBeef", 5.0),
    ("isSalad", 4.0),
    ("hasCheese", 4.0),
    ("isQuick", 6.0),
    ("isFried", 4.0),
    ("isGrilled", 4.0),
    ("isBaked", 4.0),
    ("hasVegetables", 4.0),
    ("isHealthy", 5.0),
    ("isComfortFood", 4.0),
    ("isSoup", 6.0),
    ("hasPasta", 7.0),
    ("hasRice", 5.0),
    ("isFrench", 5.0),
    ("isJapanese", 6.0),
    ("isIndian", 6.0),
    ("isThai", 6.0),
    ("isAmerican", 5.0),
    ("isMiddleEastern", 5.0),
    ("hasEggs", 5.0),
    ("hasPork", 5.0),
    ("isSweet", 6.0),
    ("isCreamy", 4.0),
    ("hasSauce", 4.0),
    ("isComplex", 3.0),
    ("isHot", 4.0),
    ("isFingerFood", 5.0),
    ("hasBread", 4.0),
    ("hasOnionGarlic", 3.0),
    ("hasCoconut", 3.0),
    ("hasHerbs", 3.0),
    ("hasMushrooms", 3.0),
    ("hasBeans", 3.0),
    ("isTangy", 4.0),
    ("isServedCold", 4.0),
    ("hasNuts", 3.0),
    ("usesChopsticks", 4.0),
    ("isStuffed", 4.0),
    ("hasCrust", 3.0),
    ("hasLamb", 4.0),
    ("isFermented", 3.0),
    ("isSmoky", 4.0),
    ("isCrispy", 4.0),
    ("hasLotsOfVegetables", 4.0),
    ("hasStrongFlavors", 4.0),
    ("isHearty", 5.0),
    ("hasHerbsSpices", 3.0),
    ("isBakedRoasted", 4.0),
    ("hasCitrus", 3.0),
];
