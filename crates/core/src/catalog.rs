//! The fixed list of curriculum topics, in book order.

use crate::model::{Topic, TopicId};

pub const TOPICS: [Topic; 28] = [
    Topic::new(1, "परिचयः (Parichayah - Introduction)", 1),
    Topic::new(2, "सः / सा / तत् (Sah / Saa / Tat)", 2),
    Topic::new(3, "ग्रन्थालयः (Granthalayah - Library)", 7),
    Topic::new(4, "अहम् / भवान् / भवती / त्वम्", 8),
    Topic::new(5, "आम् / न / किम्? (Aam / Na / Kim?)", 12),
    Topic::new(6, "अस्ति / नास्ति (Existential)", 13),
    Topic::new(7, "अत्र / तत्र / कुत्र / अन्यत्र / सर्वत्र / एकत्र", 14),
    Topic::new(8, "षष्ठी विभक्तिः (Shashti Vibhakti - Genitive)", 15),
    Topic::new(9, "पुरतः / पृष्ठतः / वामतः / दक्षिणतः", 24),
    Topic::new(10, "आवश्यकम् / मास्तु / पर्याप्तम् / धन्यवादः", 26),
    Topic::new(11, "वर्तमानकालः (Vartamanakalah - Present Tense)", 27),
    Topic::new(12, "कः किम् करोति? (Action)", 35),
    Topic::new(13, "आज्ञा-प्रार्थनादयः (Lot Lakarah - Imperative)", 37),
    Topic::new(14, "शरीरावयवाः (Shariravayavah - Body Parts)", 41),
    Topic::new(15, "संख्याः (Sankhyah - Numbers)", 42),
    Topic::new(16, "कः समयः? (Kah Samayah? - Time)", 44),
    Topic::new(17, "क्रियापदस्य विभज्य प्रयोगः", 46),
    Topic::new(18, "सप्तमी विभक्तिः (Locative Case)", 50),
    Topic::new(19, "कदा? (When?)", 64),
    Topic::new(20, "अद्य / श्वः / परश्वः / प्रपरश्वः", 66),
    Topic::new(21, "भूतकालः (Bhootakala - Past Tense)", 68),
    Topic::new(23, "उपसर्गाः (Upasargah - Prefixes)", 80),
    Topic::new(24, "द्वितीया विभक्तिः (Accusative Case)", 86),
    Topic::new(26, "भविष्यत्कालः (Future Tense)", 99),
    Topic::new(28, "पञ्चमी विभक्तिः (Ablative Case)", 107),
    Topic::new(36, "चतुर्थी विभक्तिः (Dative Case)", 134),
    Topic::new(41, "तृतीया विभक्तिः (Instrumental Case)", 159),
    Topic::new(42, "तुमुन्-प्रत्ययान्तानि (Infinitive)", 172),
];

/// Read-only view over a topic list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    topics: &'static [Topic],
}

impl Catalog {
    #[must_use]
    pub fn builtin() -> Self {
        Self { topics: &TOPICS }
    }

    #[must_use]
    pub fn new(topics: &'static [Topic]) -> Self {
        Self { topics }
    }

    #[must_use]
    pub fn topics(&self) -> &'static [Topic] {
        self.topics
    }

    #[must_use]
    pub fn get(&self, id: TopicId) -> Option<Topic> {
        self.topics.iter().find(|topic| topic.id() == id).copied()
    }

    #[must_use]
    pub fn contains(&self, id: TopicId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
