use std::sync::LazyLock;

use regex::Regex;

use crate::error::RuleError;
use crate::rules::RuleList;

pub const UNTITLED: &str = "Untitled Discourses";
pub const OTHER: &str = "Other Discourses";

const MAX_TOPIC_CHARS: usize = 60;

/// Named topics, most specific first. A pattern that is a strict refinement of a
/// later one must stay above it. Only titles that miss every category reach this
/// table, so topics whose names carry a category word ("Sundara Kanda",
/// "Adhyatma Ramayanam") have no entry.
const TOPICS: &[(&str, &str)] = &[
    (r"thiruppavai|thiruppaavai|thirppavai|tiruppavai|tiruppaavai|తిరుప్పావై", "Thiruppavai"),
    (r"m[aā]+gh[aā]*\s*pur[aā]+n[aā]*m|magha\s*puranam|మాఘపురాణ", "Magha Puranam"),
    (r"godakalyaanam|goda\s*kalyanam|goda\s*kalyaanam|గోదాకల్యాణ", "Goda Kalyanam"),
    (r"vaikunt[th]*a|vaikuntt|vaikuntaekadasi|వైకుంఠ", "Vaikunta Ekadashi"),
    (r"narayaniyam|naarayaniyam|narayaneeyam|నారాయణీయ", "Narayaniyam"),
    (r"vishnu\s*sahasranama|vishnusahasra|విష్ణుసహస్ర", "Vishnu Sahasranamam"),
    (r"lalitha\s*sahasranama|lalithasahasra|లలితాసహస్ర", "Lalitha Sahasranamam"),
    (r"hanuman\s*chalisa|hanumanchalisa|హనుమాన్\s*చాలీసా", "Hanuman Chalisa"),
    // any "bhagavat" spelling is claimed by the Bhagavatam category first
    (r"devi\s*mahatm|దేవీ\s*మాహాత్మ్య", "Devi Bhagavatam"),
    (r"garuda\s*puran|garudapuran|గరుడపురాణ", "Garuda Puranam"),
    (r"siva\s*puran|shiva\s*puran|sivapuran|shivapuran|శివపురాణ", "Shiva Puranam"),
    (r"vishnu\s*puran|vishnupuran|విష్ణుపురాణ", "Vishnu Puranam"),
    (r"bhagavat[aā]?\s*puran", "Bhagavata Puranam"),
    (r"skanda\s*puran|skandapuran|స్కందపురాణ", "Skanda Puranam"),
    (r"k[aā]+r[th]*[iī]*k[aā]*\s*pur[aā]+n|karthikapuran", "Karthika Puranam"),
    (r"dakshinamurthy|దక్షిణామూర్తి", "Dakshinamurthy Stotram"),
    (r"radiogee*th?[aā]*m|radio\s*geetham", "Radio Geetham"),
    (r"shastipoorthi|shashtipoorthi|shashtipurthi", "Shastipoorthi"),
    (r"ramana[vw]ami|rama\s*navami|sriramanavami", "Sri Rama Navami"),
    (r"guru\s*pour[n]*ima|gurupournima|gurupurnima", "Guru Pournima"),
    (r"sankranthi|sankranti|makara\s*sankra", "Sankranthi"),
    (r"ugadi|ugaadi", "Ugadi"),
    (r"diwali|deepavali|deepawali", "Deepavali"),
    (r"navaratri|navaraatri|dasara|dussehra", "Navaratri"),
    (r"shivaratri|sivaraatri|mahashivaratri|mahasivaratri", "Shivaratri"),
    (r"aditya\s*hrudayam|adityahrudayam", "Aditya Hrudayam"),
    (r"upanishad|upanishat", "Upanishads"),
    (r"stot[rh]*am|stotra|స్తోత్ర", "Stotrams"),
    (r"suprabhatam|suprabhaatam", "Suprabhatam"),
    (r"satyanarayana\s*vrat|satyanarayana\s*pooja", "Satyanarayana Vratam"),
    (r"rudrabhishek|rudram", "Rudram"),
    (r"ashtothram|ashtottaram", "Ashtottaram"),
    (r"bhajan|భజన", "Bhajans"),
];

/// Shape heuristics tried after the named topics, in order.
const HEURISTICS: &[(&str, &str)] = &[
    // placeholder titles: "Video 12", "vid 3", "2126/4", "Video2126/7"
    (r"^(?:video\s*\d+|vid\s*\d+|vedio\s*\d+|\d{4}/\d+)$", UNTITLED),
    (r"^video\s*\d+/", UNTITLED),
    (r"^videi\d+/", UNTITLED),
    // date-only titles
    (
        r"^(?:january|february|march|april|may|june|july|august|september|october|november|december)\s+\d",
        UNTITLED,
    ),
    (
        r"^\d{1,2}\s+(?:జనవరి|ఫిబ్రవరి|మార్చి|ఏప్రిల్|మే|జూన్|జూలై|ఆగస్టు|సెప్టెంబర్|అక్టోబర్|నవంబర్|డిసెంబర్)",
        UNTITLED,
    ),
    (r"^\d{1,2}\s+\w+\s+\d{4}$", UNTITLED),
    // the 30-day Karthika recitation is spelled every possible way
    (r"k[aā]*r*th[iī]*[ck]*[aā]*\s*p[uo]r[aā]*n", "Karthika Puranam"),
    (r"k[aā]*r*thee*ka\s*p[uo]r[aā]*n", "Karthika Puranam"),
    (r"sai\s*chari", "Sai Charitra"),
    (r"guru\s*chari", "Guru Charitra"),
    (r"^సత్సంగ", "Satsangam"),
    (r"^satsangam", "Satsangam"),
    (r"kalyanam|kalyanothsav|shobha\s*yatra|celebrations|haarathi|harathi", "Temple Events"),
    (r"seva\s+(?:at|on)|ekaanthaseva|ekantaseva|pavvalimpu|pavvavimpu", "Temple Events"),
];

static TRAILING_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\s*\b(?:part|chapter|sarga|sloka|slokam|pravachanam|yadhatadham|episode)(?:[^\p{L}].*)?$",
    )
    .unwrap()
});

/// Topic labelling for the catch-all category.
#[derive(Debug)]
pub struct TopicExtractor {
    topics: RuleList<&'static str>,
    heuristics: RuleList<&'static str>,
}

impl TopicExtractor {
    pub fn build() -> Result<Self, RuleError> {
        Ok(TopicExtractor {
            topics: RuleList::compile("topics", TOPICS)?,
            heuristics: RuleList::compile("topic heuristics", HEURISTICS)?,
        })
    }

    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }

    /// Never returns an empty string.
    pub fn extract(&self, title: &str) -> String {
        if let Some(label) = self
            .topics
            .first_match(title)
            .or_else(|| self.heuristics.first_match(title))
        {
            return label.to_string();
        }
        free_text_topic(title).unwrap_or_else(|| OTHER.to_string())
    }
}

/// The title minus any trailing "part 3 …" / "episode 12 …" tail, capped at 60
/// characters. `None` when too little is left to be a topic.
fn free_text_topic(title: &str) -> Option<String> {
    let cleaned = TRAILING_MARKER_RE.replace(title, "");
    let cleaned = cleaned.trim();
    if cleaned.chars().count() <= 2 {
        return None;
    }
    Some(cleaned.chars().take(MAX_TOPIC_CHARS).collect())
}
