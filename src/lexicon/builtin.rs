//! Compiled-in English→Italian lexicon.
//!
//! Descriptor targets are stored in the masculine singular form; the agreement
//! engine derives the other forms. Entries whose forms cannot be derived by
//! suffix rules carry them explicitly.

use super::{
    DescriptorEntry, FixedPhrase, Gender, GrammaticalNumber, LexiconEntry, LexiconTables,
    UnitEntry,
};

use GrammaticalNumber::{Plural as P, Singular as S};

pub const LEXICON_VERSION: &str = "en-it-5";

const BASE: &[(&str, &str, GrammaticalNumber)] = &[
    // Vegetables
    ("tomato", "pomodoro", S),
    ("tomatoes", "pomodori", P),
    ("cherry tomato", "pomodorino", S),
    ("cherry tomatoes", "pomodorini", P),
    ("onion", "cipolla", S),
    ("onions", "cipolle", P),
    ("red onion", "cipolla rossa", S),
    ("spring onions", "cipollotti", P),
    ("green onions", "cipollotti", P),
    ("scallions", "cipollotti", P),
    ("garlic", "aglio", S),
    ("garlic clove", "spicchio d'aglio", S),
    ("garlic cloves", "spicchi d'aglio", P),
    ("cloves garlic", "spicchi d'aglio", P),
    ("carrot", "carota", S),
    ("carrots", "carote", P),
    ("potato", "patata", S),
    ("potatoes", "patate", P),
    ("sweet potato", "patata dolce", S),
    ("sweet potatoes", "patate dolci", P),
    ("zucchini", "zucchina", S),
    ("eggplant", "melanzana", S),
    ("eggplants", "melanzane", P),
    ("bell pepper", "peperone", S),
    ("bell peppers", "peperoni", P),
    ("red bell pepper", "peperone rosso", S),
    ("green bell pepper", "peperone verde", S),
    ("yellow bell pepper", "peperone giallo", S),
    ("mushroom", "fungo", S),
    ("mushrooms", "funghi", P),
    ("spinach", "spinaci", P),
    ("lettuce", "lattuga", S),
    ("cucumber", "cetriolo", S),
    ("broccoli", "broccoli", P),
    ("cauliflower", "cavolfiore", S),
    ("celery", "sedano", S),
    ("kale", "cavolo riccio", S),
    ("cabbage", "cavolo", S),
    ("leek", "porro", S),
    ("shallot", "scalogno", S),
    ("shallots", "scalogni", P),
    ("pumpkin", "zucca", S),
    ("corn", "mais", S),
    ("peas", "piselli", P),
    ("avocado", "avocado", S),
    ("avocados", "avocado", P),
    // Herbs
    ("basil", "basilico", S),
    ("basil leaves", "foglie di basilico", P),
    ("parsley", "prezzemolo", S),
    ("oregano", "origano", S),
    ("thyme", "timo", S),
    ("rosemary", "rosmarino", S),
    ("sage", "salvia", S),
    ("mint", "menta", S),
    ("cilantro", "coriandolo", S),
    // Grains and legumes
    ("rice", "riso", S),
    ("brown rice", "riso integrale", S),
    ("pasta", "pasta", S),
    ("spaghetti", "spaghetti", P),
    ("bread", "pane", S),
    ("flour", "farina", S),
    ("quinoa", "quinoa", S),
    ("oats", "avena", S),
    ("rolled oats", "fiocchi d'avena", P),
    ("couscous", "couscous", S),
    ("beans", "fagioli", P),
    ("black beans", "fagioli neri", P),
    ("kidney beans", "fagioli rossi", P),
    ("white beans", "fagioli bianchi", P),
    ("green beans", "fagiolini", P),
    ("chickpeas", "ceci", P),
    ("lentils", "lenticchie", P),
    ("tofu", "tofu", S),
    ("tempeh", "tempeh", S),
    ("cornstarch", "amido di mais", S),
    ("yeast", "lievito", S),
    // Condiments
    ("salt", "sale", S),
    ("pepper", "pepe", S),
    ("black pepper", "pepe nero", S),
    ("vinegar", "aceto", S),
    ("balsamic vinegar", "aceto balsamico", S),
    ("lemon", "limone", S),
    ("lemons", "limoni", P),
    ("lemon juice", "succo di limone", S),
    ("lime", "lime", S),
    ("lime juice", "succo di lime", S),
    ("white wine", "vino bianco", S),
    ("red wine", "vino rosso", S),
    ("vegetable broth", "brodo vegetale", S),
    ("vegetable stock", "brodo vegetale", S),
    // Fruit and nuts
    ("orange", "arancia", S),
    ("apple", "mela", S),
    ("apples", "mele", P),
    ("banana", "banana", S),
    ("bananas", "banane", P),
    ("raisins", "uvetta", S),
    ("walnuts", "noci", P),
    ("almonds", "mandorle", P),
    ("pine nuts", "pinoli", P),
    ("sesame seeds", "semi di sesamo", P),
    // Dairy and eggs
    ("cheese", "formaggio", S),
    ("parmesan", "parmigiano", S),
    ("parmesan cheese", "parmigiano", S),
    ("mozzarella", "mozzarella", S),
    ("feta", "feta", S),
    ("feta cheese", "feta", S),
    ("butter", "burro", S),
    ("milk", "latte", S),
    ("coconut milk", "latte di cocco", S),
    ("almond milk", "latte di mandorla", S),
    ("cream", "panna", S),
    ("yogurt", "yogurt", S),
    ("egg", "uovo", S),
    ("eggs", "uova", P),
    // Pantry
    ("sugar", "zucchero", S),
    ("honey", "miele", S),
    ("water", "acqua", S),
    ("chocolate", "cioccolato", S),
    ("dark chocolate", "cioccolato fondente", S),
    ("tortillas", "tortillas", P),
    // Spices
    ("cinnamon", "cannella", S),
    ("ginger", "zenzero", S),
    ("cumin", "cumino", S),
    ("paprika", "paprika", S),
    ("turmeric", "curcuma", S),
    ("nutmeg", "noce moscata", S),
    ("chili", "peperoncino", S),
    ("chili powder", "peperoncino in polvere", S),
];

// Base sources whose Italian target is feminine; all others are masculine
const FEMININE: &[&str] = &[
    "onion",
    "onions",
    "red onion",
    "carrot",
    "carrots",
    "potato",
    "potatoes",
    "sweet potato",
    "sweet potatoes",
    "zucchini",
    "eggplant",
    "eggplants",
    "lettuce",
    "pumpkin",
    "basil leaves",
    "sage",
    "mint",
    "pasta",
    "flour",
    "quinoa",
    "oats",
    "lentils",
    "raisins",
    "walnuts",
    "almonds",
    "orange",
    "apple",
    "apples",
    "banana",
    "bananas",
    "mozzarella",
    "feta",
    "feta cheese",
    "cream",
    "eggs",
    "water",
    "tortillas",
    "cinnamon",
    "turmeric",
    "nutmeg",
    "paprika",
];

const STATES: &[(&str, &str, Option<&str>)] = &[
    ("drained", "scolato", None),
    ("rinsed", "sciacquato", None),
    ("peeled", "pelato", None),
    ("fresh", "fresco", None),
    ("frozen", "surgelato", None),
    ("dried", "secco", None),
    ("canned", "in scatola", Some("in scatola")),
    ("ripe", "maturo", None),
    ("raw", "crudo", None),
    ("large", "grande", None),
    ("small", "piccolo", None),
    ("medium", "medio", None),
    ("whole", "intero", None),
    ("ground", "macinato", None),
    ("freshly ground", "macinato fresco", Some("macinati freschi")),
    ("cooked", "cotto", None),
    ("boiled", "lessato", None),
    ("roasted", "arrostito", None),
    ("toasted", "tostato", None),
    ("melted", "fuso", None),
    ("softened", "ammorbidito", None),
    ("room temperature", "a temperatura ambiente", Some("a temperatura ambiente")),
    ("at room temperature", "a temperatura ambiente", Some("a temperatura ambiente")),
    ("cold", "freddo", None),
    ("warm", "tiepido", None),
    ("hot", "caldo", None),
    ("red", "rosso", None),
    ("green", "verde", None),
    ("yellow", "giallo", None),
    ("white", "bianco", None),
    ("unsalted", "senza sale", Some("senza sale")),
    ("organic", "biologico", Some("biologici")),
    ("to taste", "q.b.", Some("q.b.")),
];

const ACTIONS: &[(&str, &str, Option<&str>)] = &[
    ("chopped", "tritato", None),
    ("finely chopped", "tritato finemente", None),
    ("roughly chopped", "tritato grossolanamente", None),
    ("minced", "tritato finemente", None),
    ("diced", "tagliato a dadini", None),
    ("cubed", "tagliato a cubetti", None),
    ("cut into cubes", "tagliato a cubetti", None),
    ("sliced", "affettato", None),
    ("thinly sliced", "affettato sottilmente", None),
    ("grated", "grattugiato", None),
    ("freshly grated", "grattugiato fresco", Some("grattugiati freschi")),
    ("crushed", "schiacciato", None),
    ("mashed", "schiacciato", None),
    ("halved", "tagliato a metà", None),
    ("quartered", "tagliato in quarti", None),
    ("shredded", "sminuzzato", None),
    ("julienned", "tagliato a julienne", None),
    ("beaten", "sbattuto", None),
    ("whisked", "sbattuto", None),
    ("torn", "spezzettato", None),
    ("seeded", "privato dei semi", None),
    ("deseeded", "privato dei semi", None),
    ("pitted", "snocciolato", None),
    ("trimmed", "mondato", None),
    ("squeezed", "spremuto", None),
    ("sifted", "setacciato", None),
];

// Multi-word descriptors whose second word inflects too: (source, feminine, feminine plural)
const FEMININE_FORMS: &[(&str, &str, &str)] = &[
    ("freshly ground", "macinata fresca", "macinate fresche"),
    ("freshly grated", "grattugiata fresca", "grattugiate fresche"),
];

const FIXED_PHRASES: &[(&str, &str)] = &[
    ("extra virgin olive oil", "olio extravergine d'oliva"),
    ("olive oil", "olio d'oliva"),
    ("vegetable oil", "olio di semi"),
    ("sesame oil", "olio di sesamo"),
    ("coconut oil", "olio di cocco"),
    ("salt and pepper to taste", "sale e pepe q.b."),
    ("salt and pepper", "sale e pepe"),
    ("sea salt", "sale marino"),
    ("baking powder", "lievito per dolci"),
    ("baking soda", "bicarbonato di sodio"),
    ("soy sauce", "salsa di soia"),
    ("tomato paste", "concentrato di pomodoro"),
    ("tomato sauce", "passata di pomodoro"),
    ("brown sugar", "zucchero di canna"),
    ("powdered sugar", "zucchero a velo"),
    ("icing sugar", "zucchero a velo"),
    ("heavy cream", "panna fresca"),
    ("sour cream", "panna acida"),
    ("maple syrup", "sciroppo d'acero"),
    ("peanut butter", "burro di arachidi"),
    ("vanilla extract", "estratto di vaniglia"),
    ("nutritional yeast", "lievito alimentare"),
    ("all-purpose flour", "farina 00"),
];

const UNITS: &[(&str, &str, &str)] = &[
    ("tsp", "cucchiaino", "cucchiaini"),
    ("tsps", "cucchiaino", "cucchiaini"),
    ("teaspoon", "cucchiaino", "cucchiaini"),
    ("teaspoons", "cucchiaino", "cucchiaini"),
    ("tbsp", "cucchiaio", "cucchiai"),
    ("tbsps", "cucchiaio", "cucchiai"),
    ("tbs", "cucchiaio", "cucchiai"),
    ("tablespoon", "cucchiaio", "cucchiai"),
    ("tablespoons", "cucchiaio", "cucchiai"),
    ("cup", "tazza", "tazze"),
    ("cups", "tazza", "tazze"),
    ("ml", "ml", "ml"),
    ("milliliter", "millilitro", "millilitri"),
    ("milliliters", "millilitro", "millilitri"),
    ("l", "litro", "litri"),
    ("liter", "litro", "litri"),
    ("liters", "litro", "litri"),
    ("litre", "litro", "litri"),
    ("litres", "litro", "litri"),
    ("g", "g", "g"),
    ("gram", "grammo", "grammi"),
    ("grams", "grammo", "grammi"),
    ("kg", "kg", "kg"),
    ("kilogram", "chilogrammo", "chilogrammi"),
    ("kilograms", "chilogrammo", "chilogrammi"),
    ("oz", "oz", "oz"),
    ("ounce", "oncia", "once"),
    ("ounces", "oncia", "once"),
    ("fl oz", "oncia liquida", "once liquide"),
    ("lb", "lb", "lb"),
    ("lbs", "lb", "lb"),
    ("pound", "libbra", "libbre"),
    ("pounds", "libbra", "libbre"),
    ("clove", "spicchio", "spicchi"),
    ("cloves", "spicchio", "spicchi"),
    ("pinch", "pizzico", "pizzichi"),
    ("pinches", "pizzico", "pizzichi"),
    ("dash", "pizzico", "pizzichi"),
    ("slice", "fetta", "fette"),
    ("slices", "fetta", "fette"),
    ("can", "lattina", "lattine"),
    ("cans", "lattina", "lattine"),
    ("bunch", "mazzetto", "mazzetti"),
    ("bunches", "mazzetto", "mazzetti"),
    ("sprig", "rametto", "rametti"),
    ("sprigs", "rametto", "rametti"),
    ("package", "confezione", "confezioni"),
    ("packages", "confezione", "confezioni"),
    ("handful", "manciata", "manciate"),
    ("piece", "pezzo", "pezzi"),
    ("pieces", "pezzo", "pezzi"),
];

// Descriptive tokens with no translation worth emitting
const MODIFIERS: &[&str] = &[
    "optional",
    "divided",
    "packed",
    "heaping",
    "heaped",
    "level",
    "about",
    "approximately",
    "plus",
    "more",
    "needed",
    "extra",
    "additional",
    "good",
    "quality",
    "finely",
    "thinly",
    "roughly",
    "coarsely",
    "freshly",
    "lightly",
    "garnish",
    "serving",
];

/// Build the compiled-in lexicon tables
pub fn tables() -> LexiconTables {
    LexiconTables {
        version: LEXICON_VERSION.to_string(),
        base: BASE
            .iter()
            .map(|&(source, target, number)| LexiconEntry {
                source: source.to_string(),
                target: target.to_string(),
                number,
                gender: if FEMININE.contains(&source) {
                    Gender::Feminine
                } else {
                    Gender::Masculine
                },
            })
            .collect(),
        states: descriptors(STATES),
        actions: descriptors(ACTIONS),
        units: UNITS
            .iter()
            .map(|&(source, singular, plural)| UnitEntry {
                source: source.to_string(),
                singular: singular.to_string(),
                plural: plural.to_string(),
            })
            .collect(),
        fixed_phrases: FIXED_PHRASES
            .iter()
            .map(|&(source, target)| FixedPhrase {
                source: source.to_string(),
                target: target.to_string(),
            })
            .collect(),
        modifiers: MODIFIERS.iter().map(|m| m.to_string()).collect(),
    }
}

fn descriptors(rows: &[(&str, &str, Option<&str>)]) -> Vec<DescriptorEntry> {
    rows.iter()
        .map(|&(source, target, plural)| {
            let feminine = FEMININE_FORMS.iter().find(|(key, _, _)| *key == source);
            DescriptorEntry {
                source: source.to_string(),
                target: target.to_string(),
                plural: plural.map(String::from),
                feminine: feminine.map(|&(_, singular, _)| singular.to_string()),
                feminine_plural: feminine.map(|&(_, _, plural)| plural.to_string()),
            }
        })
        .collect()
}
