//! Page copy. Every visible string on the landing page lives here.

/// A heading with a short body, used by the hero cards, badges and steps.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    pub title: &'static str,
    pub body: &'static str,
}

/// A labelled pill with an accent.
#[derive(Debug, Clone, Copy)]
pub struct Chip {
    pub text: &'static str,
    pub accent: &'static str,
}

/// One subject tile.
#[derive(Debug, Clone, Copy)]
pub struct Subject {
    pub title: &'static str,
    pub body: &'static str,
    pub tag: &'static str,
    pub accent: &'static str,
}

/// A titled bullet list.
#[derive(Debug, Clone, Copy)]
pub struct TopicList {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

/// One question and its answer.
#[derive(Debug, Clone, Copy)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const TITLE: &str = "i🩷Worksheets  -  Free printable worksheets (Pre-K to Grade 5)";

pub const DESCRIPTION: &str = "Free printable worksheets for Pre-K, Kindergarten, and Grades 1 to 5. Math, reading, writing, phonics, handwriting, cursive, and seasonal activities. High-quality, kid-friendly PDFs.";

/// WebSite JSON-LD description. Shorter than the meta description.
pub const WEBSITE_DESCRIPTION: &str = "Free printable worksheets for Pre-K, Kindergarten, and Grades 1 to 5. Math, reading, writing, phonics, handwriting, cursive, and seasonal activities.";

pub const NAV: &[(&str, &str)] = &[
    ("#worksheets", "Worksheets"),
    ("#grades", "Grades"),
    ("#subjects", "Subjects"),
    ("#faq", "FAQ"),
];

pub const HERO_KICKER: &str = "Free printable worksheets for kids";
pub const HERO_HEADLINE: &str = "High-quality worksheets for Pre-K to Grade 5";
pub const HERO_LEAD: &str = "A growing library of printable worksheets for math, reading, writing, phonics, handwriting, cursive, and seasonal activities. Built to be clear, kid-friendly, and easy to print.";

pub const HERO_CHIPS: &[Chip] = &[
    Chip { text: "Math worksheets", accent: "purple" },
    Chip { text: "Phonics and reading", accent: "pink" },
    Chip { text: "Writing practice", accent: "yellow" },
    Chip { text: "Print-friendly PDFs", accent: "sky" },
];

pub const HERO_BUTTONS: &[&str] = &["Browse worksheets", "View grade topics"];
pub const HERO_NOTE: &str = "Early access landing page. Content library is expanding.";

pub const HERO_CARDS: &[Card] = &[
    Card {
        title: "Made for real learning",
        body: "Skill-based worksheets aligned to common grade-level expectations: practice pages, quick checks, and review packs.",
    },
    Card {
        title: "Simple, printable, fast",
        body: "Clean layouts, big enough for small hands, and ready for home, classroom, or tutoring.",
    },
    Card {
        title: "Quality first",
        body: "Each worksheet is curated and improved for clarity and usability. No messy junk pages.",
    },
];

pub const HERO_CAN_DO: TopicList = TopicList {
    title: "What you can do here",
    items: &[
        "Find worksheets by grade: Pre-K through Grade 5",
        "Choose a subject: math, reading, writing, and more",
        "Print and practice in minutes",
    ],
};

pub const TRUST_BAR: &[Card] = &[
    Card { title: "Grades", body: "Pre-K to Grade 5" },
    Card { title: "Subjects", body: "Math, reading, writing, more" },
    Card { title: "Format", body: "Print-ready worksheets" },
    Card { title: "Style", body: "Clear layouts, kid-friendly" },
];

pub const GRADES_HEADING: &str = "Worksheets by grade";
pub const GRADES_LEAD: &str = "Browse printable worksheets by grade level. Each grade includes targeted practice for math, reading, and writing, with age-appropriate layouts.";

pub const GRADES: &[Card] = &[
    Card { title: "Pre-K worksheets", body: "Early learning, shapes, colors, fine motor" },
    Card { title: "Kindergarten worksheets", body: "Letters, numbers, phonics, counting" },
    Card { title: "Grade 1 worksheets", body: "Addition, reading basics, writing practice" },
    Card { title: "Grade 2 worksheets", body: "Place value, phonics, sentence building" },
    Card { title: "Grade 3 worksheets", body: "Multiplication, comprehension, grammar" },
    Card { title: "Grade 4 worksheets", body: "Fractions, reading, writing skills" },
    Card { title: "Grade 5 worksheets", body: "Decimals, long division, paragraphs" },
];

pub const GRADE_PILLS: &[Chip] = &[
    Chip { text: "Math", accent: "purple" },
    Chip { text: "Reading", accent: "pink" },
    Chip { text: "Writing", accent: "yellow" },
];

pub const SUBJECTS_HEADING: &str = "Worksheets by subject";
pub const SUBJECTS_LEAD: &str = "Find printable worksheets for core skills. Start with math and reading for the strongest skill progression, then expand into writing, handwriting, and seasonal activities.";

pub const SUBJECTS: &[Subject] = &[
    Subject {
        title: "Math worksheets",
        body: "Counting, addition, subtraction, multiplication, division, fractions, decimals, word problems.",
        tag: "Most searched",
        accent: "purple",
    },
    Subject {
        title: "Reading worksheets",
        body: "Phonics, sight words, fluency, comprehension passages, vocabulary, sequencing.",
        tag: "Parent favorite",
        accent: "pink",
    },
    Subject {
        title: "Writing worksheets",
        body: "Handwriting practice, sentence building, punctuation, grammar, creative writing prompts.",
        tag: "Skill builder",
        accent: "yellow",
    },
    Subject {
        title: "Alphabet and phonics",
        body: "Letter recognition, sounds, blends, digraphs, CVC words, early decoding.",
        tag: "Pre-K to Grade 2",
        accent: "sky",
    },
    Subject {
        title: "Handwriting and cursive",
        body: "Letter tracing, spacing, penmanship, cursive practice, copywork pages.",
        tag: "Low competition",
        accent: "purple",
    },
    Subject {
        title: "Holiday and seasonal",
        body: "Seasonal math, word searches, writing prompts, and themed practice worksheets.",
        tag: "Seasonal spike",
        accent: "pink",
    },
];

pub const SUBJECT_PILLS: &[&str] = &["Printable", "PDF-ready", "No account"];

pub const HOW_IT_WORKS_HEADING: &str = "How i🩷Worksheets works";
pub const HOW_IT_WORKS_LEAD: &str = "This landing page is designed to test search intent and engagement while the worksheet library grows over time.";

pub const STEPS: &[Card] = &[
    Card {
        title: "Pick a grade level",
        body: "Choose Pre-K, Kindergarten, or Grades 1 to 5 to match your learner.",
    },
    Card {
        title: "Choose a subject or skill",
        body: "Math, reading, writing, phonics, handwriting, cursive, and seasonal packs.",
    },
    Card {
        title: "Print and practice",
        body: "Download print-ready worksheets designed for clarity and easy use.",
    },
    Card {
        title: "Repeat with confidence",
        body: "Build skills with steady practice, quick review sheets, and mixed skill sets.",
    },
];

pub const QUALITY_HEADING: &str = "Quality promise";
pub const QUALITY_LEAD: &str = "This site focuses on quality over volume. Worksheets are curated, improved for clarity, and formatted to print cleanly. The goal is to build a long-term library that parents and teachers can trust.";

pub const BADGES: &[Card] = &[
    Card { title: "Clear layouts", body: "Readable spacing and kid-friendly typography." },
    Card { title: "Skill-based", body: "Organized by grade, subject, and skill targets." },
    Card { title: "Print-first", body: "Works on home printers with minimal ink waste." },
    Card { title: "Growing slowly", body: "Built over years, not dumped overnight." },
];

pub const LIBRARY_KICKER: &str = "Printable worksheets library";
pub const LIBRARY_HEADING: &str = "Free printable worksheets for Pre-K, Kindergarten, and Grades 1 to 5";
pub const LIBRARY_LEAD: &str = "i🩷Worksheets is a growing collection of printable worksheets that cover early learning through Grade 5. Use these worksheets for homeschooling, classroom centers, tutoring, homework, or skill review. Topics include math worksheets, reading worksheets, phonics practice, handwriting practice, cursive worksheets, grammar, vocabulary, and seasonal learning pages.";

pub const LIBRARY_LISTS: &[TopicList] = &[
    TopicList {
        title: "Popular worksheet types",
        items: &[
            "Math practice worksheets: addition, subtraction, and more",
            "Reading comprehension worksheets with short passages",
            "Phonics worksheets: CVC words, blends, and digraphs",
            "Handwriting worksheets: tracing and letter formation",
            "Cursive practice worksheets for older grades",
        ],
    },
    TopicList {
        title: "Who these worksheets are for",
        items: &[
            "Parents who want printable learning activities",
            "Teachers who need quick classroom worksheets",
            "Homeschool families building skill routines",
            "Tutors who want focused practice pages",
        ],
    },
    TopicList {
        title: "What to expect",
        items: &[
            "Print-friendly PDF worksheets",
            "Grade-level organization and skill grouping",
            "Clear instructions and clean layout",
            "New worksheets added steadily over time",
        ],
    },
];

pub const TOPICS_HEADING: &str = "Worksheet topics by grade";
pub const TOPICS_LEAD: &str = "Start with the grade that matches your learner, then focus on the skill areas you want to strengthen. This helps you choose worksheets that are appropriately challenging and useful.";

pub const TOPIC_BLOCKS: &[TopicList] = &[
    TopicList {
        title: "Pre-K and Kindergarten worksheets",
        items: &[
            "Alphabet worksheets and letter tracing",
            "Numbers, counting, and number sense",
            "Shapes, colors, and pattern worksheets",
            "Phonics foundations and early sounds",
        ],
    },
    TopicList {
        title: "Grades 1 to 5 worksheets",
        items: &[
            "Math worksheets: operations, fractions, decimals",
            "Reading worksheets: comprehension and vocabulary",
            "Writing worksheets: grammar and paragraph practice",
            "Handwriting and cursive practice sheets",
        ],
    },
];

pub const FAQ_HEADING: &str = "Frequently asked questions";
pub const FAQ_LEAD: &str = "Quick answers about printable worksheets, grades, and what to expect as the library grows.";

pub const FAQS: &[Faq] = &[
    Faq {
        question: "Are these worksheets free to print?",
        answer: "This site is being built as a free printable worksheet library. Over time, you will find more worksheets across grades and subjects.",
    },
    Faq {
        question: "Which grades are included?",
        answer: "Worksheets are planned for Pre-K, Kindergarten, and Grades 1 through 5.",
    },
    Faq {
        question: "What subjects will you cover?",
        answer: "Core focus is math, reading, and writing. You will also see phonics, alphabet practice, handwriting, cursive, and some seasonal worksheets.",
    },
    Faq {
        question: "Are the worksheets aligned to school curricula?",
        answer: "Worksheets are organized by common grade-level skills. The goal is practical, skill-based practice that fits typical classroom expectations.",
    },
    Faq {
        question: "Will you add answer keys?",
        answer: "Some worksheet types may include answers as the library grows. For early grades, many pages are practice-focused rather than test-style.",
    },
    Faq {
        question: "Do I need an account?",
        answer: "No. The intent is simple access with printable pages, without accounts.",
    },
];

pub const FOOTER_TAGLINE: &str = "Printable learning worksheets for Pre-K to Grade 5.";
pub const FOOTER_CHIPS: &[&str] = &["Privacy", "Terms", "Contact", "About"];
pub const FOOTER_NOTE: &str = "Placeholder footer. Links intentionally disabled on this landing page.";
