use crate::candidates::WordToken;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// # Coarse part-of-speech tag
///
/// The tag set is deliberately small: chunk grammars match on these
/// categories, not on a full treebank tag set. Each tag maps to a single
/// character symbol via [`PosTag::symbol`] so that a [`PhraseGrammar`]
/// pattern can be written as a plain regex over tag symbols.
///
/// [`PhraseGrammar`]: crate::candidates::PhraseGrammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PosTag {
    Adjective,
    Noun,
    ProperNoun,
    Verb,
    Adverb,
    Determiner,
    Preposition,
    Conjunction,
    Pronoun,
    Numeral,
    Other,
}

impl PosTag {
    /// Single-character symbol used to build grammar match strings.
    pub fn symbol(self) -> char {
        match self {
            PosTag::Adjective => 'J',
            PosTag::Noun => 'N',
            PosTag::ProperNoun => 'P',
            PosTag::Verb => 'V',
            PosTag::Adverb => 'R',
            PosTag::Determiner => 'D',
            PosTag::Preposition => 'I',
            PosTag::Conjunction => 'C',
            PosTag::Pronoun => 'W',
            PosTag::Numeral => 'U',
            PosTag::Other => 'O',
        }
    }
}

/// Assigns a coarse part-of-speech tag to every word token of a document.
///
/// The tagging rules are a replaceable component of candidate extraction:
/// implementations receive the full document alongside the tokens so they can
/// use positional context. Implementations must return exactly one tag per
/// input token, in token order.
pub trait PosTagger: Send + Sync {
    fn tag(&self, document: &str, tokens: &[WordToken]) -> Vec<PosTag>;
}

lazy_static! {
    static ref DETERMINERS: HashSet<&'static str> = HashSet::from([
        "the", "a", "an", "this", "that", "these", "those", "each", "every",
        "either", "neither", "some", "any", "no", "both", "all", "several",
        "many", "much", "few", "another", "such", "enough", "most", "more",
        "less",
    ]);
    static ref PREPOSITIONS: HashSet<&'static str> = HashSet::from([
        "of", "in", "to", "for", "with", "on", "at", "by", "from", "about",
        "as", "into", "like", "through", "after", "over", "between", "out",
        "against", "during", "without", "before", "under", "around", "among",
        "within", "along", "across", "behind", "beyond", "near", "above",
        "below", "off", "toward", "towards", "upon", "despite", "per", "via",
        "until", "since", "onto", "amid", "except", "regarding",
    ]);
    static ref CONJUNCTIONS: HashSet<&'static str> = HashSet::from([
        "and", "or", "but", "nor", "so", "yet", "while", "although", "though",
        "because", "if", "unless", "whereas", "than", "whether", "when",
        "where", "whenever", "wherever",
    ]);
    static ref PRONOUNS: HashSet<&'static str> = HashSet::from([
        "i", "you", "he", "she", "it", "we", "they", "me", "him", "them",
        "us", "her", "my", "your", "his", "its", "our", "their", "mine",
        "yours", "hers", "ours", "theirs", "myself", "yourself", "himself",
        "herself", "itself", "ourselves", "themselves", "who", "whom",
        "whose", "which", "what", "something", "anything", "nothing",
        "everything", "someone", "anyone", "everyone", "nobody", "somebody",
        "anybody", "everybody", "one", "ones",
    ]);
    static ref VERBS: HashSet<&'static str> = HashSet::from([
        // auxiliaries and modals
        "am", "is", "are", "was", "were", "be", "been", "being", "have",
        "has", "had", "do", "does", "did", "will", "would", "shall",
        "should", "can", "could", "may", "might", "must", "cannot",
        // negated contraction stems left by word tokenization ("don't")
        "don", "doesn", "didn", "isn", "aren", "wasn", "weren", "hasn",
        "haven", "hadn", "couldn", "shouldn", "wouldn", "won", "mustn",
        // frequent verbs, base and third-person forms
        "use", "uses", "make", "makes", "made", "take", "takes", "took",
        "taken", "give", "gives", "gave", "given", "show", "shows",
        "showed", "shown", "find", "finds", "found", "provide", "provides",
        "require", "requires", "propose", "proposes", "demonstrate",
        "demonstrates", "describe", "describes", "introduce", "introduces",
        "evaluate", "evaluates", "compare", "compares", "improve",
        "improves", "achieve", "achieves", "enable", "enables", "allow",
        "allows", "reduce", "reduces", "contain", "contains", "consist",
        "consists", "remain", "remains", "become", "becomes", "became",
        "seem", "seems", "appear", "appears", "suggest", "suggests",
        "indicate", "indicates", "reveal", "reveals", "involve", "involves",
        "include", "includes", "apply", "applies", "perform", "performs",
        "obtain", "obtains", "observe", "observes", "consider", "considers",
        "outperform", "outperforms", "leverage", "leverages", "predicts",
        "presents", "exceeds", "yields", "produces", "combines", "captures",
        "learns", "extracts", "ranks", "emphasizes", "enforces", "tracks",
        "offers", "builds", "built", "keep", "keeps", "kept", "hold",
        "holds", "held", "mean", "means", "meant", "say", "says", "said",
        "go", "goes", "went", "gone", "get", "gets", "got", "come", "comes",
        "came", "know", "knows", "knew", "known", "see", "sees", "saw",
        "seen", "write", "writes", "wrote", "written", "run", "runs", "ran",
        "jump", "jumps", "need", "needs", "want", "wants", "aim", "aims",
        "tend", "tends", "fail", "fails", "rely", "relies", "depend",
        "depends", "help", "helps", "analyze", "analyzes", "examine",
        "examines", "explore", "explores", "investigate", "investigates",
        "differ", "differs", "highlight", "highlights",
    ]);
    static ref ADVERBS: HashSet<&'static str> = HashSet::from([
        "very", "quite", "rather", "too", "also", "just", "only", "even",
        "still", "already", "often", "sometimes", "always", "never", "well",
        "however", "thus", "hence", "moreover", "furthermore",
        "nevertheless", "instead", "almost", "again", "further", "here",
        "there", "then", "now", "not",
    ]);
    static ref ADJECTIVES: HashSet<&'static str> = HashSet::from([
        "new", "novel", "large", "small", "big", "high", "low", "deep",
        "shallow", "quick", "slow", "fast", "lazy", "good", "bad", "great",
        "strong", "weak", "robust", "simple", "complex", "key", "main",
        "major", "minor", "common", "rare", "early", "late", "recent",
        "current", "previous", "final", "first", "second", "third", "next",
        "last", "different", "similar", "single", "dual", "general",
        "specific", "particular", "special", "standard", "modern", "old",
        "young", "long", "short", "wide", "narrow", "full", "open",
        "closed", "public", "private", "global", "local", "national",
        "international", "digital", "neural", "optimal", "minimal",
        "maximal", "marginal", "artificial", "real", "synthetic", "sparse",
        "dense", "latent", "hidden", "raw", "clean", "noisy", "coarse",
        "fine", "binary", "online", "offline", "internal", "external",
        "overall", "joint", "mutual", "same", "own", "certain", "various",
        "present", "free", "safe", "valid", "red", "blue", "green",
        "brown", "black", "white", "gray", "yellow",
    ]);
    static ref NUMBER_WORDS: HashSet<&'static str> = HashSet::from([
        "zero", "two", "three", "four", "five", "six", "seven", "eight",
        "nine", "ten", "eleven", "twelve", "twenty", "thirty", "fifty",
        "hundred", "thousand", "million", "billion",
    ]);
}

/// # Deterministic lexicon and suffix rule tagger
///
/// The built-in [`PosTagger`] implementation. Closed-class words come from
/// embedded lexicons; open-class words fall through suffix rules,
/// capitalization, and a default-to-noun rule. Two policies are tuned for
/// keyphrase extraction rather than parsing:
///
/// * `-ing` forms outside the verb lexicon tag as nouns, so gerund heads
///   ("machine learning", "training") stay available as phrase material;
/// * `-ed` forms outside the verb lexicon tag as adjectives, so participial
///   modifiers ("labeled datasets") extend the phrase they modify.
///
/// Capitalized tokens tag as proper nouns unless they sit at a sentence
/// start, detected from the characters between consecutive tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconTagger;

impl LexiconTagger {
    pub fn new() -> Self {
        LexiconTagger
    }

    fn classify(token: &WordToken, lower: &str, sentence_initial: bool) -> PosTag {
        if DETERMINERS.contains(lower) {
            return PosTag::Determiner;
        }
        if PREPOSITIONS.contains(lower) {
            return PosTag::Preposition;
        }
        if CONJUNCTIONS.contains(lower) {
            return PosTag::Conjunction;
        }
        if PRONOUNS.contains(lower) {
            return PosTag::Pronoun;
        }
        if VERBS.contains(lower) {
            return PosTag::Verb;
        }
        if ADVERBS.contains(lower) {
            return PosTag::Adverb;
        }
        if ADJECTIVES.contains(lower) {
            return PosTag::Adjective;
        }
        if NUMBER_WORDS.contains(lower)
            || token.text.chars().next().map_or(false, |c| c.is_ascii_digit())
        {
            return PosTag::Numeral;
        }
        if lower.len() > 4 && lower.ends_with("ly") {
            return PosTag::Adverb;
        }
        if lower.len() > 4 && lower.ends_with("ing") {
            return PosTag::Noun;
        }
        if lower.len() > 3 && lower.ends_with("ed") {
            return PosTag::Adjective;
        }
        if has_adjective_suffix(lower) {
            return PosTag::Adjective;
        }
        if !sentence_initial && token.text.chars().next().map_or(false, char::is_uppercase) {
            return PosTag::ProperNoun;
        }
        PosTag::Noun
    }
}

fn has_adjective_suffix(lower: &str) -> bool {
    lower.len() > 5
        && ["ous", "ful", "ive", "able", "ible", "less", "ish", "ical"]
            .iter()
            .any(|suffix| lower.ends_with(suffix))
}

fn is_sentence_initial(document: &str, tokens: &[WordToken], index: usize) -> bool {
    if index == 0 {
        return true;
    }
    let gap_start = tokens[index - 1].offset.end as usize;
    let gap_end = tokens[index].offset.begin as usize;
    document[gap_start..gap_end]
        .chars()
        .any(|c| matches!(c, '.' | '!' | '?' | ';' | ':' | '\n'))
}

impl PosTagger for LexiconTagger {
    fn tag(&self, document: &str, tokens: &[WordToken]) -> Vec<PosTag> {
        tokens
            .iter()
            .enumerate()
            .map(|(index, token)| {
                let lower = token.text.to_lowercase();
                let sentence_initial = is_sentence_initial(document, tokens, index);
                Self::classify(token, &lower, sentence_initial)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidates::WordTokenizer;

    fn tag_text(text: &str) -> Vec<(String, PosTag)> {
        let tokenizer = WordTokenizer::default();
        let tokens = tokenizer.tokenize(text);
        let tags = LexiconTagger::new().tag(text, &tokens);
        tokens
            .iter()
            .zip(tags)
            .map(|(token, tag)| (token.text.to_string(), tag))
            .collect()
    }

    #[test]
    fn tags_simple_sentence() {
        let tagged = tag_text("The quick brown fox jumps over the lazy dog");
        let tags: Vec<PosTag> = tagged.iter().map(|(_, tag)| *tag).collect();
        assert_eq!(
            tags,
            [
                PosTag::Determiner,
                PosTag::Adjective,
                PosTag::Adjective,
                PosTag::Noun,
                PosTag::Verb,
                PosTag::Preposition,
                PosTag::Determiner,
                PosTag::Adjective,
                PosTag::Noun,
            ]
        );
    }

    #[test]
    fn gerunds_tag_as_nouns() {
        let tagged = tag_text("machine learning enables training");
        assert_eq!(tagged[1], ("learning".to_string(), PosTag::Noun));
        assert_eq!(tagged[3], ("training".to_string(), PosTag::Noun));
    }

    #[test]
    fn participles_tag_as_adjectives() {
        let tagged = tag_text("large labeled datasets");
        assert_eq!(tagged[1].1, PosTag::Adjective);
        assert_eq!(tagged[2].1, PosTag::Noun);
    }

    #[test]
    fn sentence_initial_capital_is_not_proper_noun() {
        let tagged = tag_text("Datasets matter. Benchmarks from Paris differ.");
        // "Datasets" and "Benchmarks" open sentences; "Paris" does not.
        assert_eq!(tagged[0].1, PosTag::Noun);
        assert_eq!(tagged[2].1, PosTag::Noun);
        assert_eq!(tagged[4].1, PosTag::ProperNoun);
    }

    #[test]
    fn numerals_are_excluded_from_noun_tags() {
        let tagged = tag_text("three models and 42 baselines");
        assert_eq!(tagged[0].1, PosTag::Numeral);
        assert_eq!(tagged[3].1, PosTag::Numeral);
    }

    #[test]
    fn symbols_are_unique_per_tag() {
        let tags = [
            PosTag::Adjective,
            PosTag::Noun,
            PosTag::ProperNoun,
            PosTag::Verb,
            PosTag::Adverb,
            PosTag::Determiner,
            PosTag::Preposition,
            PosTag::Conjunction,
            PosTag::Pronoun,
            PosTag::Numeral,
            PosTag::Other,
        ];
        let symbols: std::collections::HashSet<char> =
            tags.iter().map(|tag| tag.symbol()).collect();
        assert_eq!(symbols.len(), tags.len());
    }
}
