//! Lesson material shipped with the application.

use std::collections::HashMap;

use crate::model::{
    Difficulty::{Easy, Hard, Medium},
    Flashcard, GrandDeck, GrandQuiz, Question, TopicContent, TopicId,
};

/// Pre-loaded content keyed by topic id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentStore {
    entries: HashMap<TopicId, TopicContent>,
}

impl ContentStore {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The curriculum content compiled into the binary.
    #[must_use]
    pub fn builtin() -> Self {
        let mut store = Self::empty();
        store.insert(TopicId::new(1), introduction());
        store.insert(TopicId::new(2), third_person_pronouns());
        store.insert(TopicId::new(8), genitive_case());
        store
    }

    pub fn insert(&mut self, id: TopicId, content: TopicContent) {
        self.entries.insert(id, content);
    }

    /// Any entry for the id, including placeholder-status ones.
    #[must_use]
    pub fn get(&self, id: TopicId) -> Option<&TopicContent> {
        self.entries.get(&id)
    }

    /// The entry for the id only if it holds real lesson material.
    #[must_use]
    pub fn digitized(&self, id: TopicId) -> Option<&TopicContent> {
        self.get(id).filter(|content| content.is_digitized())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn introduction() -> TopicContent {
    TopicContent::builtin(
        "This lesson introduces basic Sanskrit self-introduction and formal addressing. It covers 'Mama' (My), 'Bhavatah' (Your - masculine), and 'Bhavatyah' (Your - feminine).",
        "या पाठामध्ये संस्कृतमध्ये स्वतःची ओळख कशी करून द्यावी आणि इतरांना औपचारिकपणे कसे संबोधित करावे हे शिकवले आहे. यात 'मम' (माझे), 'भवतः' (तुझे - पुल्लिंगी) आणि 'भवत्याः' (तुझे - स्त्रीलिंगी) या शब्दांचा समावेश आहे.",
        vec![
            Question::builtin(
                "मम नाम _______ |",
                ["गणेशः", "त्वम्", "अस्ति", "किम्"],
                "गणेशः",
                "'Mama nama...' is followed by the person's name.",
                Easy,
            ),
            Question::builtin(
                "भवतः नाम किम्? (To a boy)",
                ["मम नाम", "भवतः नाम", "कः", "किम्"],
                "किम्",
                "'Kim' is the interrogative pronoun for 'What'.",
                Easy,
            ),
            Question::builtin(
                "भवत्याः नाम _______ |",
                ["रमेशः", "सीता", "तत्", "भवतः"],
                "सीता",
                "'Bhavatyah' is used for feminine gender.",
                Medium,
            ),
            Question::builtin(
                "How do you say 'My name'?",
                ["मम नाम", "तव नाम", "किम् नाम", "सः नाम"],
                "मम नाम",
                "Mama means 'My'.",
                Easy,
            ),
            Question::builtin(
                "Question word for 'Your name'?",
                ["कः", "का", "किम्", "कुत्र"],
                "किम्",
                "Kim means 'What'.",
                Medium,
            ),
        ],
        vec![
            Flashcard::builtin("मम", "My / माझे"),
            Flashcard::builtin("भवतः", "Your (Masculine) / तुझे (पुल्लिंगी)"),
            Flashcard::builtin("भवत्याः", "Your (Feminine) / तुझे (स्त्रीलिंगी)"),
            Flashcard::builtin("नाम", "Name / नाव"),
            Flashcard::builtin("किम्", "What / काय"),
        ],
    )
}

fn third_person_pronouns() -> TopicContent {
    TopicContent::builtin(
        "Focuses on third-person pronouns: Sah (He), Saa (She), Tat (It) for distant objects, and Eshah, Esha, Etat for near objects.",
        "हा पाठ तृतीय पुरुषी सर्वनामांवर आधारित आहे: दूरच्या वस्तूंसाठी सः (तो), सा (ती), तत् (ते) आणि जवळच्या वस्तूंसाठी एषः, एषा, एतत्.",
        vec![
            Question::builtin(
                "_______ बालकः | (Near)",
                ["एषः", "एषा", "एतत्", "सा"],
                "एषः",
                "Eshah is masculine near.",
                Easy,
            ),
            Question::builtin(
                "_______ बालिका | (Distant)",
                ["सः", "सा", "तत्", "एषा"],
                "सा",
                "Saa is feminine distant.",
                Easy,
            ),
            Question::builtin(
                "_______ फलम् | (Near)",
                ["एषः", "एषा", "एतत्", "सः"],
                "एतत्",
                "Etat is neuter near.",
                Medium,
            ),
            Question::builtin(
                "Is 'Saa' used for a boy?",
                ["आम्", "न", "किम्", "कः"],
                "न",
                "Saa is feminine.",
                Easy,
            ),
            Question::builtin(
                "_______ पुस्तकम् | (Distant)",
                ["सः", "सा", "तत्", "एषा"],
                "तत्",
                "Tat is neuter distant.",
                Medium,
            ),
        ],
        vec![
            Flashcard::builtin("सः", "He (Distant) / तो"),
            Flashcard::builtin("सा", "She (Distant) / ती"),
            Flashcard::builtin("तत्", "That (Neuter) / ते"),
            Flashcard::builtin("एषः", "He (Near) / हा"),
            Flashcard::builtin("एषा", "She (Near) / ही"),
        ],
    )
}

fn genitive_case() -> TopicContent {
    TopicContent::builtin(
        "Introduces the Genitive Case (Shashti Vibhakti) to indicate possession, like 'of' in English.",
        "हा पाठ षष्ठी विभक्तीवर आधारित आहे, ज्याचा वापर मालकी हक्क दर्शवण्यासाठी केला जातो (जसे मराठीत 'चा/ची/चे').",
        vec![
            Question::builtin(
                "रामस्य भ्राता _______ |",
                ["लक्ष्मणः", "सीता", "दशरथः", "रावणः"],
                "लक्ष्मणः",
                "Ramasya means 'of Rama'.",
                Medium,
            ),
            Question::builtin(
                "सीतायाः पतिः _______ |",
                ["रामः", "लक्ष्मणः", "हनुमान्", "भरतः"],
                "रामः",
                "Sitayah is the feminine genitive.",
                Medium,
            ),
            Question::builtin(
                "कस्य लेखनी?",
                ["मम", "रामस्य", "सः", "तत्"],
                "रामस्य",
                "Kasya asks 'Whose?'.",
                Hard,
            ),
            Question::builtin(
                "What suffix is added for masculine genitive?",
                ["-स्य", "-याः", "-म्", "-एन"],
                "-स्य",
                "syah is added to masculine stems.",
                Easy,
            ),
            Question::builtin(
                "नद्याः जलम् |",
                ["River's water", "In the river", "By the river", "To the river"],
                "River's water",
                "Nadyah is genitive for Nadi.",
                Hard,
            ),
        ],
        vec![
            Flashcard::builtin("रामस्य", "Of Rama / रामाचा"),
            Flashcard::builtin("सीतायाः", "Of Sita / सीतेचा"),
            Flashcard::builtin("कस्य", "Whose? (M) / कोणाचा?"),
            Flashcard::builtin("कस्याः", "Whose? (F) / कोणाचे?"),
            Flashcard::builtin("मम", "My / माझे"),
        ],
    )
}

/// The 30-question revision quiz shipped with the app.
#[must_use]
pub fn grand_quiz() -> GrandQuiz {
    let mut questions = vec![
        Question::builtin(
            "मम नाम गणेशः | 'मम' इत्यस्य अर्थः कः?",
            ["My", "Your", "His", "Her"],
            "My",
            "Mama means my.",
            Easy,
        ),
        Question::builtin(
            "कः समयः? (९:००)",
            ["नववादनम्", "अष्टवादनम्", "दशवादनम्", "एकादशवादनम्"],
            "नववादनम्",
            "9 is Nava.",
            Easy,
        ),
        Question::builtin(
            "रामः वनम् _______ |",
            ["गच्छति", "गच्छसि", "गच्छामि", "गच्छन्ति"],
            "गच्छति",
            "Third person singular.",
            Medium,
        ),
        Question::builtin(
            "त्वम् कुत्र _______?",
            ["गच्छति", "गच्छसि", "गच्छामि", "गच्छन्ति"],
            "गच्छसि",
            "Second person singular.",
            Medium,
        ),
        Question::builtin(
            "षष्ठी विभक्तिः कस्य कृते उपयुज्यते?",
            ["सम्बन्धः", "कर्म", "करणम्", "अधिकरणम्"],
            "सम्बन्धः",
            "Genitive relates objects.",
            Hard,
        ),
        Question::builtin(
            "What is 'Tomorrow'?",
            ["अद्य", "श्वः", "ह्यः", "परश्वः"],
            "श्वः",
            "Shvah is tomorrow.",
            Medium,
        ),
        Question::builtin(
            "Identify Feminine: सः, सा, तत्",
            ["सः", "सा", "तत्", "एषः"],
            "सा",
            "Saa is feminine.",
            Easy,
        ),
        Question::builtin(
            "Count '५' in Sanskrit.",
            ["पञ्च", "चत्वारि", "षट्", "सप्त"],
            "पञ्च",
            "5 is Pancha.",
            Easy,
        ),
        Question::builtin(
            "Past tense of 'पठति'?",
            ["अपठत्", "पठिष्यति", "पठतु", "पठेत्"],
            "अपठत्",
            "Lang Lakar is past.",
            Hard,
        ),
        Question::builtin(
            "Infinitive of 'खादति'?",
            ["खादितुम्", "खादित्वा", "खादन्", "खादतु"],
            "खादितुम्",
            "Tumun suffix adds 'to'.",
            Hard,
        ),
    ];

    questions.extend((0..20_usize).map(|i| {
        let difficulty = match i {
            0..=6 => Easy,
            7..=13 => Medium,
            _ => Hard,
        };
        Question::builtin(
            &format!("General Mastery Question {}: कस्य व्याकरणम् प्रसिद्धम्?", i + 11),
            ["पाणिनिः", "कालिदासः", "व्यासः", "वाल्मीकिः"],
            "पाणिनिः",
            "Panini is the father of Sanskrit grammar.",
            difficulty,
        )
    }));

    GrandQuiz::builtin(questions)
}

/// The 30-card master revision deck shipped with the app.
#[must_use]
pub fn grand_deck() -> GrandDeck {
    let cards = [
        ("अद्य", "Today / आज"),
        ("श्वः", "Tomorrow / उद्या"),
        ("ह्यः", "Yesterday / काल"),
        ("कदा?", "When? / केव्हा?"),
        ("एकम्", "One / एक"),
        ("द्वे", "Two / दोन"),
        ("त्रीणि", "Three / तीन"),
        ("पठति", "Reads / वाचतो"),
        ("लिखति", "Writes / लिहितो"),
        ("खादति", "Eats / खातो"),
        ("पिबति", "Drinks / पितो"),
        ("गच्छति", "Goes / जातो"),
        ("आगच्छति", "Comes / येतो"),
        ("उपविशति", "Sits / बसतो"),
        ("उत्तिष्ठति", "Stands / उठतो"),
        ("पश्यति", "Sees / पाहतो"),
        ("शृणोति", "Hears / ऐकतो"),
        ("वदति", "Speaks / बोलतो"),
        ("किम्?", "What? / काय?"),
        ("कुत्र?", "Where? / कोठे?"),
        ("कथम्?", "How? / कसे?"),
        ("कति?", "How many? / किती?"),
        ("किमर्थम्?", "Why? / कशासाठी?"),
        ("अस्ति", "Is / आहे"),
        ("नास्ति", "Is not / नाही"),
        ("पुरतः", "In front / समोर"),
        ("पृष्ठतः", "Behind / मागे"),
        ("वामतः", "Left / डावीकडे"),
        ("दक्षिणतः", "Right / उजवीकडे"),
        ("धन्यवादः", "Thank you / धन्यवाद"),
    ];
    GrandDeck::builtin(
        cards
            .iter()
            .map(|(front, back)| Flashcard::builtin(front, back))
            .collect(),
    )
}
