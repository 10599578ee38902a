use rs_lm_core::model::bigram::Bigram;
use rs_lm_core::model::corpus::Corpus;
use rs_lm_core::model::unigram::Unigram;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rs_lm_core=debug".parse().unwrap()),
        )
        .init();

    // Corpus file: one sentence per line, optionally given as first argument
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "./data/corpus.txt".to_owned());

    // Load with boundary markers enabled: every sentence is wrapped
    // with <s> and </s> before counting
    let corpus = Corpus::new(&path);

    // An unreadable file degrades to an empty corpus instead of failing
    if corpus.num_sentences() == 0 {
        println!("Empty corpus at '{}', nothing to model", path);
        return;
    }

    println!("Sentences: {}", corpus.num_sentences());
    println!("Unique words (boundary tokens included): {}", corpus.num_unique_words());

    // Unigram: maximum-likelihood token probabilities over the whole corpus
    let unigram = Unigram::from_sentences(corpus.sentences());
    println!("Total token occurrences: {}", unigram.total_count());

    // The most frequent tokens and their probabilities
    let mut ranked: Vec<_> = unigram.counts().iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));
    for (token, count) in ranked.iter().take(5) {
        if let Some(p) = unigram.prob(token) {
            println!("  {}: {} occurrence(s), p = {:.4}", token, count, p);
        }
    }

    // 10 independent weighted draws from the unigram distribution
    let draws: Vec<&str> = (0..10).filter_map(|_| unigram.generate()).collect();
    println!("Unigram draws: {}", draws.join(" "));

    // Bigram: conditional probabilities P(follower | predecessor),
    // normalized by the predecessor's unigram count
    let bigram = Bigram::from_sentences(corpus.sentences());
    println!("Observed pairs: {}", bigram.counts().len());

    // Markov-chain generation: start at <s>, draw followers until </s>
    // is drawn or the length cap is reached
    for i in 0..10 {
        println!("Generated sentence {}: {}", i + 1, bigram.generate(20).join(" "));
    }
}
