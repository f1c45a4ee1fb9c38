use quaero_core::corpus::{Corpus, Document, Query, SentenceSet};
use quaero_core::tokenizer::tokenize;
use quaero_core::{answer, extract_sentences, segment, top_documents, top_sentences, Error, IdfTable};

fn corpus_from(texts: &[(&str, &str)]) -> Corpus {
    let mut corpus = Corpus::new();
    for (name, text) in texts {
        corpus.insert(Document {
            name: name.to_string(),
            text: text.to_string(),
            tokens: tokenize(text),
        });
    }
    corpus
}

fn corpus_idfs(corpus: &Corpus) -> IdfTable {
    IdfTable::compute(corpus.iter().map(|d| d.tokens.as_slice())).unwrap()
}

#[test]
fn idf_is_monotonic_in_rarity() {
    // "common" in 3 of 4 documents, "rare" in 1 of 4
    let corpus = corpus_from(&[
        ("a.txt", "common words everywhere"),
        ("b.txt", "common words"),
        ("c.txt", "common rare words"),
        ("d.txt", "nothing shared"),
    ]);
    let idfs = corpus_idfs(&corpus);
    assert!(idfs.get("rare").unwrap() > idfs.get("common").unwrap());
}

#[test]
fn idf_is_bounded_by_ln_n() {
    let corpus = corpus_from(&[
        ("a.txt", "shared unique1"),
        ("b.txt", "shared unique2"),
        ("c.txt", "shared unique3"),
    ]);
    let idfs = corpus_idfs(&corpus);
    let bound = 3.0f32.ln();
    for word in ["shared", "unique1", "unique2", "unique3"] {
        let idf = idfs.get(word).unwrap();
        assert!((0.0..=bound + 1e-6).contains(&idf), "{word} out of bounds: {idf}");
    }
    // zero exactly when the word appears in every document
    assert_eq!(idfs.get("shared"), Some(0.0));
    assert!((idfs.get("unique1").unwrap() - bound).abs() < 1e-6);
}

#[test]
fn idf_matches_the_formula() {
    // "python" in 2 of 10 documents: idf = ln(10/2) = ln 5
    let mut texts: Vec<(String, String)> = (0..8)
        .map(|i| (format!("filler{i}.txt"), format!("filler{i} material")))
        .collect();
    texts.push(("p1.txt".into(), "python code".into()));
    texts.push(("p2.txt".into(), "python scripts".into()));
    let pairs: Vec<(&str, &str)> = texts.iter().map(|(n, t)| (n.as_str(), t.as_str())).collect();
    let corpus = corpus_from(&pairs);
    let idfs = corpus_idfs(&corpus);
    assert!((idfs.get("python").unwrap() - 5.0f32.ln()).abs() < 1e-6);
}

#[test]
fn document_ranking_is_deterministic() {
    let corpus = corpus_from(&[
        ("a.txt", "the cat sat on the mat"),
        ("b.txt", "the dog sat"),
        ("c.txt", "the cat ran far"),
    ]);
    let idfs = corpus_idfs(&corpus);
    let query = Query::parse("cat sat");
    let first = top_documents(&query, &corpus, &idfs, 3);
    let second = top_documents(&query, &corpus, &idfs, 3);
    assert_eq!(first, second);
}

#[test]
fn more_occurrences_never_rank_lower() {
    let corpus = corpus_from(&[
        ("one.txt", "heron by the lake"),
        ("many.txt", "heron heron heron nesting"),
        ("none.txt", "owls elsewhere"),
    ]);
    let idfs = corpus_idfs(&corpus);
    let query = Query::parse("heron");
    let ranked = top_documents(&query, &corpus, &idfs, 3);
    assert_eq!(ranked[0], "many.txt");
}

#[test]
fn equal_scores_keep_corpus_order() {
    // scenario: A and C both contain "cat" once; stable tie-break picks A
    let corpus = corpus_from(&[
        ("a.txt", "the cat sat"),
        ("b.txt", "the dog sat"),
        ("c.txt", "the cat ran"),
    ]);
    let idfs = corpus_idfs(&corpus);
    let query = Query::parse("cat");
    assert_eq!(top_documents(&query, &corpus, &idfs, 1), vec!["a.txt"]);
    assert_eq!(top_documents(&query, &corpus, &idfs, 3), vec!["a.txt", "c.txt", "b.txt"]);
}

#[test]
fn unknown_query_words_fall_back_to_corpus_order() {
    let corpus = corpus_from(&[
        ("a.txt", "the cat sat"),
        ("b.txt", "the dog sat"),
    ]);
    let idfs = corpus_idfs(&corpus);
    let query = Query::parse("zeppelin");
    // every document scores 0; order is corpus insertion order
    assert_eq!(top_documents(&query, &corpus, &idfs, 2), vec!["a.txt", "b.txt"]);
}

#[test]
fn density_breaks_sentence_idf_ties() {
    // both sentences contain both query words; a third sentence keeps their
    // idfs nonzero; density 2/3 vs 2/4 decides
    let mut set = SentenceSet::new();
    set.insert(
        "cats hunt mice".into(),
        vec!["cats".into(), "hunt".into(), "mice".into()],
    );
    set.insert(
        "cats and dogs hunt".into(),
        vec!["cats".into(), "dogs".into(), "hunt".into(), "together".into()],
    );
    set.insert("wrens sing".into(), vec!["wrens".into(), "sing".into()]);
    let idfs = IdfTable::compute(set.iter().map(|(_, t)| t)).unwrap();
    let query = Query::from_words(["cats".to_string(), "hunt".to_string()]);
    let top = top_sentences(&query, &set, &idfs, 2).unwrap();
    assert_eq!(top, vec!["cats hunt mice", "cats and dogs hunt"]);
}

#[test]
fn extraction_is_idempotent() {
    let corpus = corpus_from(&[("a.txt", "Cats hunt mice. Dogs chase cats.\nOwls hoot at night.")]);
    let selected = vec!["a.txt".to_string()];
    let first = extract_sentences(&selected, &corpus, segment::split_sentences, tokenize);
    let second = extract_sentences(&selected, &corpus, segment::split_sentences, tokenize);
    let a: Vec<(&str, &[String])> = first.iter().collect();
    let b: Vec<(&str, &[String])> = second.iter().collect();
    assert_eq!(a, b);
    assert_eq!(first.len(), 3);
}

#[test]
fn answer_returns_best_sentence_end_to_end() {
    let corpus = corpus_from(&[
        ("cats.txt", "Cats hunt mice at night.\nCats and dogs hunt together sometimes."),
        ("dogs.txt", "Dogs guard houses.\nDogs chase cars."),
    ]);
    let query = Query::parse("how do cats hunt");
    let answers = answer(&query, &corpus, 1, 1).unwrap();
    assert_eq!(answers, vec!["Cats hunt mice at night."]);
}

#[test]
fn answer_on_empty_corpus_is_an_error() {
    let corpus = Corpus::new();
    let query = Query::parse("anything");
    let err = answer(&query, &corpus, 1, 1).unwrap_err();
    assert!(matches!(err, Error::EmptyCorpus));
}

#[test]
fn answer_with_no_candidate_sentences_is_empty() {
    // the only document tokenizes to nothing, so no sentences survive
    let corpus = corpus_from(&[("stop.txt", "And so it was.")]);
    let query = Query::parse("cats");
    let answers = answer(&query, &corpus, 1, 1).unwrap();
    assert!(answers.is_empty());
}

#[test]
fn requesting_more_sentences_than_exist_returns_all() {
    let corpus = corpus_from(&[("a.txt", "Cats hunt mice. Dogs chase cats.")]);
    let query = Query::parse("cats");
    let answers = answer(&query, &corpus, 1, 10).unwrap();
    assert_eq!(answers.len(), 2);
}
