//! Built-in word lists backing [`CategoryTable::builtin`].
//!
//! [`CategoryTable::builtin`]: crate::CategoryTable::builtin

/// Words for the `ADJECTIVE` category.
pub(crate) const ADJECTIVES: &[&str] = &[
    "able", "agile", "amber", "ancient", "angry", "arid", "autumn", "awake", "bashful", "billowing",
    "bitter", "bold", "brave", "breezy", "brief", "bright", "brisk", "bubbly", "busy", "calm",
    "careful", "cheerful", "chilly", "clever", "cloudy", "cosy", "crisp", "curious", "damp",
    "dapper", "daring", "dark", "dazzling", "deep", "delicate", "dizzy", "drab", "dreamy", "dusty",
    "eager", "early", "earnest", "elegant", "excellent", "faint", "fancy", "fearless", "feisty",
    "fierce", "fluffy", "fond", "frosty", "funny", "gentle", "giddy", "gleaming", "glossy",
    "golden", "graceful", "grumpy", "happy", "hasty", "hazy", "hidden", "hollow", "honest",
    "humble", "hungry", "icy", "idle", "jolly", "jovial", "keen", "kind", "lanky", "lazy",
    "lively", "lonely", "loud", "lucky", "mellow", "merry", "misty", "modest", "muddy", "nimble",
    "noble", "noisy", "odd", "patient", "plucky", "polite", "proud", "quick", "quiet", "rapid",
    "restless", "rosy", "rusty", "shiny", "shy", "silent", "silly", "sleepy", "slow", "sly",
    "smooth", "snowy", "solemn", "sparkling", "spry", "steady", "stormy", "sunny", "swift",
    "tame", "tidy", "timid", "tiny", "tranquil", "velvet", "vivid", "wandering", "wary", "weary",
    "wild", "windy", "wise", "witty", "zany", "zealous",
];

/// Words for the `ANIMAL` category.
pub(crate) const ANIMALS: &[&str] = &[
    "aardvark", "albatross", "alpaca", "anteater", "antelope", "armadillo", "badger", "barracuda",
    "bat", "beaver", "bison", "boar", "buffalo", "butterfly", "camel", "capybara", "caribou",
    "cat", "chameleon", "cheetah", "chinchilla", "cobra", "cormorant", "coyote", "crab", "crane",
    "crow", "deer", "dingo", "dolphin", "donkey", "dormouse", "dove", "dragonfly", "duck",
    "eagle", "eel", "elephant", "elk", "emu", "falcon", "ferret", "finch", "flamingo", "fox",
    "frog", "gazelle", "gecko", "gerbil", "giraffe", "gnu", "goat", "goose", "gorilla",
    "grasshopper", "hamster", "hare", "hawk", "hedgehog", "heron", "hippo", "hornet", "horse",
    "hyena", "ibis", "iguana", "impala", "jackal", "jaguar", "jellyfish", "kangaroo", "kingfisher",
    "kiwi", "koala", "lemur", "leopard", "lion", "llama", "lobster", "lynx", "magpie", "manatee",
    "meerkat", "mink", "mole", "mongoose", "moose", "narwhal", "newt", "ocelot", "octopus",
    "okapi", "opossum", "orca", "ostrich", "otter", "owl", "oyster", "panda", "panther", "parrot",
    "pelican", "penguin", "pheasant", "pigeon", "platypus", "porcupine", "puffin", "quail",
    "rabbit", "raccoon", "raven", "reindeer", "salamander", "seal", "shark", "sloth", "snail",
    "sparrow", "squid", "squirrel", "starling", "stoat", "swan", "tapir", "tiger", "toad",
    "toucan", "turtle", "vulture", "walrus", "weasel", "whale", "wolf", "wombat", "yak", "zebra",
];

/// Words for the `SIZE` category.
pub(crate) const SIZES: &[&str] = &[
    "small", "big", "large", "huge", "tiny", "gigantic", "teeny", "enormous",
];

/// Words for the `COLOR` category.
pub(crate) const COLORS: &[&str] = &[
    "red", "blue", "green", "yellow", "black", "maroon", "pink", "purple",
];
