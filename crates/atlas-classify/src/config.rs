//! Broad-category rule tables.
//!
//! Plain immutable configuration data: each rule maps a category name to
//! keyword and regex-pattern lists. The defaults are built once at
//! classifier construction and never mutated at runtime. Rule order is
//! part of the contract: score ties resolve to the earlier rule.

use serde::{Deserialize, Serialize};

/// One broad category's matching rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRule {
    /// Category display name
    pub name: String,

    /// Substring keywords matched against the lowercased title
    pub keywords: Vec<String>,

    /// Regex patterns matched against the lowercased title
    pub patterns: Vec<String>,
}

/// Configuration for the broad-category classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Category rules, in tie-break priority order
    #[serde(default = "default_rules")]
    pub rules: Vec<CategoryRule>,

    /// Category assigned when nothing matches
    #[serde(default = "default_fallback_category")]
    pub fallback_category: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            rules: default_rules(),
            fallback_category: default_fallback_category(),
        }
    }
}

fn default_fallback_category() -> String {
    "Miscellaneous".to_string()
}

fn rule(name: &str, keywords: &[&str], patterns: &[&str]) -> CategoryRule {
    CategoryRule {
        name: name.to_string(),
        keywords: keywords.iter().map(|s| s.to_string()).collect(),
        patterns: patterns.iter().map(|s| s.to_string()).collect(),
    }
}

fn default_rules() -> Vec<CategoryRule> {
    vec![
        rule(
            "Tech & Development",
            &[
                "code", "programming", "python", "javascript", "typescript", "react", "rust",
                "java", "node", "django", "flask", "api", "rest", "graphql", "git", "github",
                "app", "web", "ios", "android", "database", "sql", "mongodb", "postgres",
                "docker", "kubernetes", "aws", "cloud", "html", "css", "npm", "frontend",
                "backend", "machine learning", "llm", "chatgpt", "openai", "deploy", "linux",
                "terminal", "bash", "cli", "debug", "error", "bug", "refactor", "testing",
                "software", "algorithm", "scraping",
            ],
            &[
                r"\.py$", r"\.js$", r"\.tsx?$", r"code", r"script", r"function", r"variable",
                r"terminal", r"setup", r"deploy", r"api", r"database", r"server", r"client",
            ],
        ),
        rule(
            "Career & Professional",
            &[
                "resume", "cv", "interview", "job", "career", "recruiter", "hiring",
                "cover letter", "portfolio", "internship", "mba", "certification",
                "consulting", "product manager", "engineer", "analyst", "manager",
                "leadership", "scrum", "agile", "salary", "negotiation", "promotion",
                "linkedin", "networking", "mentor", "startup", "founder", "pitch",
                "investor", "funding",
            ],
            &[
                r"interview", r"resume", r"career", r"job", r"professional", r"recruiter",
                r"hiring", r"intern", r"salary", r"work",
            ],
        ),
        rule(
            "Relationships & Social",
            &[
                "flirt", "dating", "date", "relationship", "boyfriend", "girlfriend",
                "partner", "spouse", "love", "romantic", "crush", "marriage", "wedding",
                "breakup", "friend", "friendship", "family", "parents", "birthday",
                "caption", "instagram", "social media", "reply", "reconnect",
            ],
            &[
                r"flirt", r"dating", r"relationship", r"romantic", r"love", r"caption",
                r"response", r"reply", r"friend", r"family",
            ],
        ),
        rule(
            "Health & Wellness",
            &[
                "health", "medical", "doctor", "hospital", "symptom", "pain", "illness",
                "injury", "treatment", "diagnosis", "therapy", "medication", "exercise",
                "workout", "gym", "fitness", "yoga", "running", "diet", "nutrition",
                "calorie", "protein", "supplement", "mental health", "anxiety",
                "depression", "stress", "mindfulness", "sleep", "insomnia", "wellness",
                "weight",
            ],
            &[
                r"health", r"medical", r"symptom", r"treatment", r"workout", r"fitness",
                r"diet", r"mental", r"wellness", r"exercise",
            ],
        ),
        rule(
            "Finance & Business",
            &[
                "money", "finance", "budget", "expense", "saving", "debt", "loan",
                "mortgage", "credit", "investment", "invest", "stock", "etf", "portfolio",
                "dividend", "trading", "market", "crypto", "bitcoin", "blockchain",
                "business", "company", "llc", "revenue", "profit", "accounting", "tax",
                "economy", "inflation", "price", "cost", "payment", "pricing",
                "financial", "retirement", "insurance",
            ],
            &[
                r"finance", r"invest", r"stock", r"money", r"business", r"market",
                r"price", r"cost", r"budget", r"tax", r"crypto",
            ],
        ),
        rule(
            "Language & Translation",
            &[
                "translate", "translation", "interpret", "localization", "chinese",
                "english", "spanish", "french", "german", "japanese", "korean", "mandarin",
                "language", "bilingual", "vocabulary", "grammar", "pronunciation",
                "meaning", "definition", "phrase", "idiom", "slang", "word", "dictionary",
                "terminology", "sentence", "nuance",
            ],
            &[
                r"meaning", r"translate", r"definition", r"language", r"grammar",
                r"pronunciation", r"vocab",
            ],
        ),
        rule(
            "Creative & Entertainment",
            &[
                "music", "song", "album", "artist", "band", "playlist", "lyrics", "art",
                "painting", "drawing", "illustration", "design", "graphic design", "logo",
                "typography", "photo", "photography", "video", "film", "animation",
                "movie", "tv show", "series", "netflix", "youtube", "podcast", "game",
                "gaming", "story", "novel", "fiction", "poetry", "poem", "screenplay",
                "festival", "theater", "comedy",
            ],
            &[
                r"music", r"song", r"art", r"creative", r"design", r"video", r"caption",
                r"entertainment", r"film", r"game", r"photo",
            ],
        ),
        rule(
            "Learning & Education",
            &[
                "learn", "learning", "education", "academic", "student", "teacher",
                "professor", "school", "college", "university", "course", "class",
                "lecture", "seminar", "study", "homework", "assignment", "thesis", "exam",
                "test", "grade", "tutorial", "guide", "textbook", "curriculum",
                "explanation", "understand", "concept", "theory", "science", "math",
                "physics", "history", "philosophy", "research", "skill", "knowledge",
            ],
            &[
                r"learn", r"education", r"course", r"explain", r"understand", r"theory",
                r"concept", r"lecture", r"study", r"school",
            ],
        ),
        rule(
            "Food & Cooking",
            &[
                "food", "cook", "cooking", "bake", "baking", "grill", "kitchen", "chef",
                "recipe", "ingredient", "dish", "cuisine", "flavor", "seasoning", "sauce",
                "meal", "dinner", "lunch", "breakfast", "snack", "dessert", "restaurant",
                "cafe", "takeout", "menu", "drink", "cocktail", "wine", "coffee", "tea",
                "vegetarian", "vegan", "gluten-free",
            ],
            &[
                r"food", r"cook", r"recipe", r"meal", r"restaurant", r"drink", r"kitchen",
                r"ingredient", r"dish", r"cuisine",
            ],
        ),
        rule(
            "Product & Ideas",
            &[
                "idea", "concept", "innovation", "brainstorm", "problem solving",
                "solution", "product", "feature", "functionality", "enhancement",
                "prototype", "mockup", "wireframe", "user experience", "user interface",
                "proposal", "recommendation", "strategy", "roadmap", "milestone", "mvp",
                "prd", "requirement", "spec", "feedback", "validation", "usability",
                "app idea", "platform", "saas",
            ],
            &[
                r"idea", r"product", r"feature", r"concept", r"innovation", r"design",
                r"prototype", r"strategy", r"mvp", r"ux",
            ],
        ),
        rule(
            "Travel & Lifestyle",
            &[
                "travel", "trip", "vacation", "holiday", "adventure", "tourism", "flight",
                "airport", "airline", "train", "road trip", "cruise", "hotel", "hostel",
                "airbnb", "resort", "booking", "destination", "beach", "mountain",
                "itinerary", "visa", "passport", "luggage", "sightseeing", "hiking",
                "camping", "lifestyle", "home", "apartment", "rent", "moving",
                "furniture", "decor", "shopping",
            ],
            &[
                r"travel", r"trip", r"flight", r"hotel", r"vacation", r"destination",
                r"home", r"lifestyle", r"shopping",
            ],
        ),
        rule(
            "Personal & Reflection",
            &[
                "personal", "reflection", "introspection", "self-awareness", "identity",
                "values", "journal", "diary", "thoughts", "feelings", "emotions", "goal",
                "aspiration", "dream", "resolution", "growth", "development", "progress",
                "motivation", "inspiration", "passion", "resilience", "mindset",
                "gratitude", "habit", "routine", "discipline", "productivity", "life",
                "happiness", "decision", "advice", "meditation", "well-being",
            ],
            &[
                r"personal", r"reflection", r"journal", r"self", r"life", r"goal",
                r"motivation", r"advice", r"growth", r"mindset",
            ],
        ),
        rule(
            "Communication & Email",
            &[
                "email", "inbox", "subject line", "signature", "message", "letter",
                "memo", "draft", "write", "compose", "correspondence", "rephrase",
                "rewrite", "refine", "polish", "edit", "proofread", "revise",
                "summarize", "summary", "outline", "format", "tone", "formal",
                "informal", "concise", "one-liner", "shorten", "blog", "copywriting",
                "follow-up", "reminder", "apology", "announcement", "report",
                "presentation",
            ],
            &[
                r"email", r"message", r"draft", r"write", r"rephrase", r"refine",
                r"summarize", r"tone", r"formal", r"letter",
            ],
        ),
        rule(
            "Data & Research",
            &[
                "data", "dataset", "big data", "data science", "data analysis",
                "analytics", "research", "investigation", "experiment", "methodology",
                "findings", "paper", "publication", "whitepaper", "case study",
                "statistics", "quantitative", "qualitative", "correlation", "regression",
                "chart", "graph", "plot", "dashboard", "visualization", "metrics", "kpi",
                "benchmark", "trend", "survey", "questionnaire", "spreadsheet", "excel",
                "pandas",
            ],
            &[
                r"data", r"research", r"analysis", r"report", r"study", r"statistic",
                r"chart", r"graph", r"metric", r"survey",
            ],
        ),
        rule(
            "Fun & Miscellaneous",
            &[
                "fun", "funny", "humor", "laugh", "joke", "pun", "riddle", "comedy",
                "meme", "random", "miscellaneous", "trivia", "quiz", "puzzle",
                "challenge", "hobby", "pastime", "leisure", "craft", "diy", "pet", "cat",
                "dog", "animal", "emoji", "gif", "curious", "interesting", "weird",
                "fact", "celebrate", "party",
            ],
            &[
                r"fun", r"random", r"joke", r"trivia", r"hobby", r"pet", r"game",
                r"meme", r"emoji",
            ],
        ),
    ]
}
