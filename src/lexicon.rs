//! Static word tables and indicator patterns shared by the analyzer and the mode generators.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

/// Common English words ignored by keyword extraction.
const STOPWORDS: &[&str] = &[
    "about", "above", "across", "after", "again", "against", "almost", "along", "already", "also",
    "although", "always", "among", "another", "anyone", "anything", "around", "because", "been",
    "before", "being", "below", "between", "both", "came", "cannot", "come", "could", "does",
    "doing", "done", "down", "during", "each", "either", "else", "enough", "even", "ever", "every",
    "from", "further", "gets", "give", "given", "goes", "going", "gone", "good", "have", "having",
    "here", "hers", "herself", "himself", "into", "itself", "just", "keep", "know", "last", "less",
    "like", "made", "make", "many", "might", "more", "most", "much", "must", "myself", "need",
    "never", "next", "none", "nothing", "often", "once", "only", "other", "others", "ours",
    "ourselves", "over", "own", "perhaps", "quite", "rather", "really", "said", "same", "says",
    "seem", "seems", "shall", "should", "since", "some", "something", "still", "such", "take",
    "than", "that", "their", "theirs", "them", "themselves", "then", "there", "these", "they",
    "thing", "things", "this", "those", "though", "through", "thus", "together", "toward",
    "towards", "under", "until", "upon", "used", "uses", "using", "very", "want", "wants", "well",
    "were", "what", "whatever", "when", "whenever", "where", "whether", "which", "while", "whom",
    "whose", "will", "with", "within", "without", "would", "yours", "yourself", "yourselves",
];

/// Vocabulary that marks a keyword as technical.
const TECHNICAL_TERMS: &[&str] = &[
    "algorithm", "algorithms", "analytics", "architecture", "async", "authentication",
    "authorization", "backend", "bandwidth", "binary", "boolean", "buffer", "build", "cache",
    "caching", "class", "client", "cloud", "cluster", "code", "compiler", "component",
    "components", "concurrency", "config", "configuration", "container", "containers",
    "database", "databases", "debug", "debugging", "dependency", "dependencies", "deploy",
    "deployment", "docker", "encryption", "endpoint", "endpoints", "framework", "frontend",
    "function", "functions", "hash", "http", "https", "index", "infrastructure", "integration",
    "interface", "json", "kernel", "kubernetes", "latency", "library", "linux", "memory",
    "method", "methods", "microservice", "microservices", "middleware", "migration", "module",
    "modules", "network", "object", "parser", "performance", "pipeline", "protocol", "query",
    "queries", "queue", "refactor", "refactoring", "regex", "repository", "request", "response",
    "runtime", "schema", "script", "security", "server", "servers", "service", "services",
    "socket", "software", "stack", "storage", "syntax", "system", "thread", "threads",
    "throughput", "token", "type", "variable", "version", "websocket",
];

lazy_static! {
    static ref STOPWORD_SET: HashSet<&'static str> = STOPWORDS.iter().copied().collect();
    static ref TECHNICAL_SET: HashSet<&'static str> = TECHNICAL_TERMS.iter().copied().collect();

    /// Sentences describing how something is built.
    pub static ref IMPLEMENTATION_TERMS: Regex = Regex::new(
        r"(?i)\b(?:implement\w*|function\w*|method\w*|class(?:es)?|api|apis|algorithm\w*|architecture|configur\w*|deploy\w*|install\w*|module\w*|interface\w*|database\w*|endpoint\w*)\b"
    )
    .expect("Invalid regex: implementation terms");

    /// Sentences that recommend a course of action.
    pub static ref RECOMMENDATION_TERMS: Regex = Regex::new(
        r"(?i)\b(?:recommend\w*|suggest\w*|should|propose\w*|advise\w*|consider|must|ought to)\b"
    )
    .expect("Invalid regex: recommendation terms");

    /// Positive indicators for pros/cons classification.
    pub static ref POSITIVE_TERMS: Regex = Regex::new(
        r"(?i)\b(?:advantages?|benefits?|pros|strengths?|positive|good|great|excellent|improve[sd]?|improvements?|better|efficient|effective|successful|success|gains?)\b"
    )
    .expect("Invalid regex: positive indicators");

    /// Negative indicators for pros/cons classification.
    pub static ref NEGATIVE_TERMS: Regex = Regex::new(
        r"(?i)\b(?:disadvantages?|drawbacks?|cons|weakness(?:es)?|negative|bad|poor|problems?|issues?|risks?|limitations?|worse|fails?|failures?|difficult|challenges?|downsides?|however)\b"
    )
    .expect("Invalid regex: negative indicators");

    /// Phrases that set two things against each other.
    pub static ref COMPARISON_TERMS: Regex = Regex::new(
        r"(?i)\b(?:compared (?:to|with)|versus|vs|than|whereas|unlike|similar(?:ly)?|in contrast|on the other hand|differs?|difference)\b"
    )
    .expect("Invalid regex: comparison terms");
}

/// Returns true if the lowercase `word` is a stopword.
pub fn is_stopword(word: &str) -> bool {
    STOPWORD_SET.contains(word)
}

/// Returns true if the lowercase `word` belongs to the technical vocabulary.
pub fn is_technical_term(word: &str) -> bool {
    TECHNICAL_SET.contains(word)
}
