//! Template sentences and vocabularies for dynamic question synthesis.
//!
//! Phrasing variety is purely cosmetic; the chosen template never affects
//! scoring. Each family's sample cap keeps a single generation pass small.

pub const CUISINE_TEMPLATES: &[&str] = &[
    "Are you craving authentic {cuisine} flavors right now?",
    "Do you want something that reminds you of {cuisine} street food?",
    "Are you in the mood for traditional {cuisine} spices?",
    "Would you like something from the {cuisine} region specifically?",
];

pub const INGREDIENT_TEMPLATES: &[&str] = &[
    "Do you want something with {ingredient} as the main ingredient?",
    "Are you craving the taste of {ingredient} today?",
    "Would you like {ingredient} to be prominent in your meal?",
    "Do you want something where {ingredient} really stands out?",
];

pub const MOOD_TEMPLATES: &[&str] = &[
    "Are you feeling {mood} and want food to match that vibe?",
    "Do you want something {mood} to suit your current mood?",
    "Are you looking for food that makes you feel {mood}?",
    "Would {mood} food hit the spot right now?",
];

pub const TEXTURE_TEMPLATES: &[&str] = &[
    "Are you craving something with a {texture} texture?",
    "Do you want something really {texture}?",
    "Are you in the mood for food that's {texture}?",
    "Would you like something with a nice {texture} bite?",
];

pub const COMPARISON_TEMPLATES: &[&str] = &[
    "Would you prefer {option1} or {option2} style?",
    "Are you more in the mood for {option1} or {option2}?",
    "Between {option1} and {option2}, what sounds better?",
    "Would you lean towards {option1} or {option2} today?",
];

pub const METHOD_TEMPLATES: &[&str] = &[
    "Do you want something that's {method}?",
    "Are you craving {method} food right now?",
    "Would you like something prepared by {method}?",
];

pub const SITUATION_TEMPLATES: &[&str] = &[
    "Do you want something perfect for {situation}?",
    "Are you looking for {situation} appropriate food?",
    "Do you need something that works well for {situation}?",
    "Would you like food that's ideal for {situation}?",
];

pub const INGREDIENTS: &[&str] = &[
    "garlic", "onions", "tomatoes", "mushrooms", "peppers", "spinach", "avocado", "chicken",
    "beef", "pork", "fish", "shrimp", "tofu", "eggs", "cheese", "bacon", "rice", "pasta",
    "noodles", "bread", "potatoes", "beans", "lentils", "quinoa", "coconut", "peanuts",
    "almonds", "herbs", "spices", "ginger", "lime", "lemon",
];

pub const MOODS: &[&str] = &[
    "adventurous", "comforting", "energetic", "relaxed", "indulgent", "healthy", "nostalgic",
    "exotic", "festive", "cozy", "refreshing", "warming", "cooling", "uplifting",
    "sophisticated", "playful", "rustic", "elegant", "casual",
];

pub const TEXTURES: &[&str] = &[
    "crispy", "creamy", "crunchy", "smooth", "chewy", "tender", "flaky", "silky", "hearty",
    "light", "dense", "airy", "juicy", "moist", "firm", "soft",
];

pub const METHODS: &[&str] = &[
    "grilled", "fried", "baked", "roasted", "steamed", "boiled", "braised", "stewed", "smoked",
    "barbecued", "poached", "pan-seared", "deep-fried", "stir-fried", "slow-cooked",
];

pub const SITUATIONS: &[&str] = &[
    "eating at your desk", "sharing with friends", "date night", "family dinner", "quick lunch",
    "late night snack", "weekend brunch", "picnic", "party", "game day", "movie night",
    "study session", "comfort after a bad day",
];

// Per-family sample caps for one generation pass.
pub const CUISINE_CAP: usize = 10;
pub const INGREDIENT_SAMPLE: usize = 15;
pub const MOOD_SAMPLE: usize = 10;
pub const TEXTURE_SAMPLE: usize = 8;
pub const METHOD_SAMPLE: usize = 8;
pub const SITUATION_SAMPLE: usize = 6;

// Per-family question weights.
pub const CUISINE_WEIGHT: u8 = 6;
pub const INGREDIENT_WEIGHT: u8 = 4;
pub const MOOD_WEIGHT: u8 = 5;
pub const TEXTURE_WEIGHT: u8 = 4;
pub const COMPARISON_WEIGHT: u8 = 7;
pub const METHOD_WEIGHT: u8 = 4;
pub const SITUATION_WEIGHT: u8 = 3;
