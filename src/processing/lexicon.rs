//! Static reference term sets
//!
//! All lists are lower-case. The skill and education lists are matched by
//! substring containment, so their order is the order results come out in.
//! The remaining lists back the part-of-speech tagger and the entity
//! recognizer in [`crate::processing::tagger`].

/// Skill terms recognized in resumes, in reporting order.
pub const SKILLS: &[&str] = &[
    "javascript", "python", "java", "c++", "c#", "go", "golang", "ruby", "php", "swift",
    "html", "css", "react", "angular", "vue", "node", "express", "django", "flask", "spring",
    "aws", "azure", "gcp", "docker", "kubernetes", "terraform", "jenkins", "git", "github",
    "sql", "mysql", "postgresql", "mongodb", "redis", "elasticsearch", "graphql", "rest api",
    "machine learning", "artificial intelligence", "data science", "big data", "data analysis",
    "tensorflow", "pytorch", "pandas", "numpy", "scikit-learn", "nlp", "computer vision",
    "agile", "scrum", "kanban", "jira", "confluence", "leadership", "teamwork", "communication",
];

/// Terms that mark a paragraph as describing education.
pub const EDUCATION: &[&str] = &[
    "bachelor", "master", "phd", "doctorate", "degree", "university", "college", "institute",
    "b.tech", "m.tech", "b.e.", "m.e.", "b.sc", "m.sc", "b.a.", "m.a.", "mba", "certification",
];

pub(crate) const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "some", "any",
    "no", "all", "both", "either", "neither", "another", "such",
];

pub(crate) const PREPOSITIONS: &[&str] = &[
    "in", "on", "at", "by", "for", "with", "from", "to", "of", "about", "into", "over",
    "under", "between", "through", "during", "across", "within", "without", "since",
    "until", "via", "per", "among", "toward", "towards", "upon", "after", "before",
    "around", "against", "along", "behind", "beyond", "including",
];

pub(crate) const PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "myself", "we", "us", "our", "ours", "you", "your", "yours",
    "he", "him", "his", "she", "her", "hers", "it", "its", "they", "them", "their",
    "theirs", "who", "whom", "whose", "which", "what",
];

pub(crate) const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "yet", "so", "while", "whereas", "although", "because",
    "if", "as", "than", "whether",
];

pub(crate) const MODALS: &[&str] = &[
    "can", "could", "may", "might", "must", "shall", "should", "will", "would",
];

/// Verb forms that carry no reliable suffix cue.
pub(crate) const VERBS: &[&str] = &[
    "be", "is", "am", "are", "was", "were", "been", "being", "have", "has", "had",
    "do", "does", "did", "done", "get", "got", "make", "made", "lead", "led", "build",
    "built", "run", "ran", "write", "wrote", "written", "drive", "drove", "grow", "grew",
    "own", "ship", "shipped", "mentor", "manage", "develop", "design", "deliver",
    "implement", "create", "maintain", "improve", "reduce", "increase", "support",
    "use", "work", "worked", "help", "join", "joined", "spent", "took", "became",
];

pub(crate) const ADVERBS: &[&str] = &[
    "not", "very", "also", "too", "well", "just", "only", "then", "there", "here",
    "now", "currently", "recently", "previously", "successfully", "approximately",
];

pub(crate) const ADJECTIVES: &[&str] = &[
    "senior", "junior", "lead", "principal", "new", "good", "great", "strong", "large",
    "small", "full", "high", "low", "key", "main", "major", "several", "many", "multiple",
    "various", "other", "same", "different", "early", "late", "current", "cross",
];

/// Words that end an organization name ("acme corp", "initech inc").
pub(crate) const ORGANIZATION_SUFFIXES: &[&str] = &[
    "inc", "inc.", "corp", "corp.", "corporation", "ltd", "ltd.", "llc", "gmbh", "co.",
    "company", "group", "labs", "technologies", "systems", "solutions", "university",
    "college", "institute", "school", "academy", "foundation",
];

/// Known organizations matched as whole tokens.
pub(crate) const ORGANIZATIONS: &[&str] = &[
    "google", "microsoft", "amazon", "apple", "meta", "facebook", "netflix", "ibm",
    "oracle", "intel", "nvidia", "salesforce", "adobe", "uber", "airbnb", "stripe",
    "spotify", "twitter", "linkedin", "accenture", "deloitte", "infosys", "mit",
    "stanford", "harvard", "berkeley", "oxford", "cambridge",
];

/// Known locations matched as whole tokens or token pairs.
pub(crate) const LOCATIONS: &[&str] = &[
    "london", "paris", "berlin", "munich", "amsterdam", "dublin", "madrid", "zurich",
    "toronto", "vancouver", "seattle", "boston", "chicago", "austin", "denver",
    "new york", "san francisco", "los angeles", "bangalore", "hyderabad", "pune",
    "mumbai", "delhi", "singapore", "tokyo", "sydney", "melbourne", "california",
    "texas", "india", "germany", "canada", "usa", "uk", "remote",
];

/// Month names and abbreviations, tagged as proper nouns.
pub(crate) const MONTHS: &[&str] = &[
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "sept", "oct", "nov",
    "dec", "january", "february", "march", "april", "june", "july", "august",
    "september", "october", "november", "december",
];
