// Risk classification — score-to-tier mapping, recommendation tables, and
// the shared color vocabulary.

pub mod tier;
