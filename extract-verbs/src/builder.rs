//! The single-pass pipeline: skip-check, classify, register, filter,
//! commit. One `CorpusBuilder` owns all five entity tables and the
//! occurrence list; `finish` freezes everything into the output tables.

use anyhow::Context;

use crate::classify::{self, ClassifyError};
use crate::corpus::{Book, Root, VerbForm, VerbOccurrence, Verse};
use crate::filter::OccurrenceFilter;
use crate::parsing::ParsingFeatures;
use crate::records::WordRecord;
use crate::tables::{
    BookRow, CorpusTables, OccurrenceRow, ParsingRow, RootRow, VerbFormRow, VerseRow,
};
use hebrew_utils::text::{MAQEF, compact_transliterate};
use rank_table::RankTable;

/// Corpus nodes with known-bad annotations, skipped up front.
const EXCLUDED_NODES: [u32; 3] = [
    112471, // strange yiqtol 3fp ending (תה)
    65032,  // messy data caused by textual variants
    16340,  // tagged with a 3fp suffix that is really 3fs
];

pub struct CorpusBuilder {
    books: RankTable<Book>,
    roots: RankTable<Root>,
    forms: RankTable<VerbForm>,
    verses: RankTable<Verse>,
    parsings: RankTable<ParsingFeatures>,
    occurrences: Vec<VerbOccurrence>,
    filter: OccurrenceFilter,
    skipped: u64,
    unsupported_stems: u64,
    dropped: u64,
}

impl CorpusBuilder {
    pub fn new(seed: u64) -> Self {
        CorpusBuilder {
            books: RankTable::new(),
            roots: RankTable::new(),
            forms: RankTable::new(),
            verses: RankTable::new(),
            parsings: RankTable::new(),
            occurrences: Vec::new(),
            filter: OccurrenceFilter::new(seed),
            skipped: 0,
            unsupported_stems: 0,
            dropped: 0,
        }
    }

    /// Process one word record from the corpus walk. The corpus-access
    /// layer only exports word nodes, so everything arriving here is a
    /// word; non-verbs and foreign-language tokens are skipped here.
    ///
    /// A filtered-out occurrence leaves its entity registrations (and their
    /// counts) in place; only the occurrence itself is discarded.
    pub fn process(&mut self, record: WordRecord) -> anyhow::Result<()> {
        let record = record.into_nfc();
        if self.should_skip(&record) {
            self.skipped += 1;
            return Ok(());
        }

        let primary = match classify::classify_tagged(&record) {
            Ok(parsing) => parsing,
            Err(ClassifyError::UnsupportedStem(code)) => {
                log::debug!("node {}: dropping unsupported stem {code:?}", record.node);
                self.unsupported_stems += 1;
                return Ok(());
            }
            Err(error) => {
                return Err(error)
                    .with_context(|| format!("classifying corpus node {}", record.node));
            }
        };
        let secondary = classify::classify_positional(&record)
            .with_context(|| format!("decoding morphology code on node {}", record.node))?;

        let book = Book::new(&record);
        self.books.add(book.name.clone(), book);

        let root = Root::new(&record);
        self.roots.add(root.lemma.clone(), root);

        let form = VerbForm::new(&record);
        let form_key = form.text.clone();
        self.forms.add(form_key.clone(), form);

        let verse = Verse::new(&record);
        let verse_key = verse.key();
        self.verses.add(verse_key.clone(), verse);

        let mut parsings = vec![primary];
        if let Some(secondary) = secondary {
            if secondary != parsings[0] {
                parsings.push(secondary);
            }
        }
        let parsing_keys: Vec<String> = parsings.iter().map(ParsingFeatures::key).collect();
        for (key, parsing) in parsing_keys.iter().zip(&parsings) {
            self.parsings.add(key.clone(), parsing.clone());
        }

        let root = self
            .roots
            .get(&record.lemma)
            .context("root not registered")?;
        let form = self.forms.get(&form_key).context("form not registered")?;
        if self.filter.should_drop(root, form, &parsings) {
            self.dropped += 1;
            return Ok(());
        }

        self.occurrences.push(VerbOccurrence {
            form_key,
            verse_key,
            parsing_keys,
        });
        Ok(())
    }

    fn should_skip(&self, record: &WordRecord) -> bool {
        record.language != "Hebrew"
            || record.part_of_speech != "verb"
            || EXCLUDED_NODES.contains(&record.node)
            || record.surface.contains(MAQEF)
    }

    /// Finalize every entity table and assemble the six output tables.
    /// Runs once, after the full corpus walk; nothing can be registered
    /// afterwards.
    pub fn finish(mut self) -> anyhow::Result<(CorpusTables, Stats)> {
        self.books.finalize_ids();
        self.roots.finalize_ids();
        self.forms.finalize_ids();
        self.verses.finalize_ids();
        self.parsings.finalize_ids();

        let stats = self.collect_stats();

        let books = self
            .books
            .iter_ranked()
            .map(|book| BookRow(book.display_name()))
            .collect();
        let roots = self
            .roots
            .iter_ranked()
            .map(|root| {
                RootRow(
                    compact_transliterate(&root.lemma),
                    root.frequency,
                    root.gloss.clone(),
                )
            })
            .collect();
        let verbs = self
            .forms
            .iter_ranked()
            .map(|form| {
                let root_id = self.roots.id_of(&form.root_key).with_context(|| {
                    format!("form {:?} references unregistered root", form.text)
                })?;
                Ok(VerbFormRow(compact_transliterate(&form.text), root_id))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        let parsings = self.parsings.iter_ranked().map(parsing_row).collect();
        let verses = self
            .verses
            .iter_ranked()
            .map(|verse| {
                let book_id = self.books.id_of(&verse.book_key).with_context(|| {
                    format!("verse {:?} references unregistered book", verse.key())
                })?;
                Ok(VerseRow(
                    book_id,
                    verse.chapter,
                    verse.verse,
                    compact_transliterate(&verse.text),
                ))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        let occurrences = self
            .occurrences
            .iter()
            .map(|occurrence| {
                Ok(OccurrenceRow {
                    verb: self
                        .forms
                        .id_of(&occurrence.form_key)
                        .context("occurrence references unregistered form")?,
                    verse: self
                        .verses
                        .id_of(&occurrence.verse_key)
                        .context("occurrence references unregistered verse")?,
                    parsings: occurrence
                        .parsing_keys
                        .iter()
                        .map(|key| {
                            self.parsings
                                .id_of(key)
                                .context("occurrence references unregistered parsing")
                        })
                        .collect::<anyhow::Result<Vec<_>>>()?,
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok((
            CorpusTables {
                verbs,
                occurrences,
                parsings,
                verses,
                roots,
                books,
            },
            stats,
        ))
    }

    fn collect_stats(&self) -> Stats {
        let mut marker_totals = [MarkerTotals::default(), MarkerTotals::default()];
        let mut with_secondary = 0;
        for occurrence in &self.occurrences {
            if occurrence.parsing_keys.len() > 1 {
                with_secondary += 1;
            }
            for (slot, key) in occurrence.parsing_keys.iter().enumerate().take(2) {
                if let Some(parsing) = self.parsings.get(key) {
                    let totals = &mut marker_totals[slot];
                    totals.paragogic_nun += usize::from(parsing.paragogic_nun);
                    totals.paragogic_heh += usize::from(parsing.paragogic_heh);
                    totals.cohortative += usize::from(parsing.cohortative);
                    totals.energic_nun += usize::from(parsing.energic_nun);
                }
            }
        }
        Stats {
            books: self.books.len(),
            roots: self.roots.len(),
            forms: self.forms.len(),
            parsings: self.parsings.len(),
            verses: self.verses.len(),
            occurrences: self.occurrences.len(),
            with_secondary,
            skipped: self.skipped,
            unsupported_stems: self.unsupported_stems,
            dropped: self.dropped,
            marker_totals,
        }
    }
}

fn parsing_row(parsing: &ParsingFeatures) -> ParsingRow {
    ParsingRow(
        parsing.stem.id(),
        parsing.tense.id(),
        [
            parsing.person.normalized(),
            parsing.gender.normalized(),
            parsing.number.normalized(),
        ],
        [
            parsing.suffix_person.normalized(),
            parsing.suffix_gender.normalized(),
            parsing.suffix_number.normalized(),
        ],
        u8::from(parsing.paragogic_nun),
        u8::from(parsing.paragogic_heh),
        u8::from(parsing.cohortative),
        u8::from(parsing.energic_nun),
    )
}

/// Per-run summary, printed by the binary.
#[derive(Debug, Clone)]
pub struct Stats {
    pub books: usize,
    pub roots: usize,
    pub forms: usize,
    pub parsings: usize,
    pub verses: usize,
    pub occurrences: usize,
    /// Occurrences carrying a disagreeing secondary analysis.
    pub with_secondary: usize,
    pub skipped: u64,
    pub unsupported_stems: u64,
    pub dropped: u64,
    /// Marker totals over committed occurrences, per analysis slot
    /// (tagged first, positional second).
    pub marker_totals: [MarkerTotals; 2],
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerTotals {
    pub paragogic_nun: usize,
    pub paragogic_heh: usize,
    pub cohortative: usize,
    pub energic_nun: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::sample_verb;

    #[test]
    fn non_verbs_and_foreign_words_are_skipped() {
        let mut builder = CorpusBuilder::new(0);

        let mut record = sample_verb();
        record.part_of_speech = "subs".to_string();
        builder.process(record).unwrap();

        let mut record = sample_verb();
        record.language = "Aramaic".to_string();
        builder.process(record).unwrap();

        let mut record = sample_verb();
        record.node = EXCLUDED_NODES[0];
        builder.process(record).unwrap();

        let mut record = sample_verb();
        record.surface = format!("קָטַל{MAQEF}אֶת", MAQEF = MAQEF);
        builder.process(record).unwrap();

        let (tables, stats) = builder.finish().unwrap();
        assert_eq!(stats.skipped, 4);
        assert!(tables.occurrences.is_empty());
        assert!(tables.roots.is_empty());
    }

    #[test]
    fn unsupported_stem_drops_token_without_aborting() {
        let mut builder = CorpusBuilder::new(0);
        let mut record = sample_verb();
        record.stem = "hst".to_string();
        builder.process(record).unwrap();

        let (tables, stats) = builder.finish().unwrap();
        assert_eq!(stats.unsupported_stems, 1);
        assert!(tables.occurrences.is_empty());
    }

    #[test]
    fn unknown_suffix_code_aborts() {
        let mut builder = CorpusBuilder::new(0);
        let mut record = sample_verb();
        record.morph_code = Some("HVqp3ms".to_string());
        record.morph_suffix_code = Some("HZx".to_string());
        assert!(builder.process(record).is_err());
    }

    #[test]
    fn accent_variants_collapse_to_one_form() {
        let mut builder = CorpusBuilder::new(0);

        let record = sample_verb();
        builder.process(record.clone()).unwrap();

        let mut accented = record;
        accented.surface = "קָטַ֖ל".to_string();
        builder.process(accented).unwrap();

        assert_eq!(builder.forms.len(), 1);
        let form = builder.forms.get("קָטַל").unwrap();
        assert_eq!(form.variants.len(), 2);

        let (tables, stats) = builder.finish().unwrap();
        assert_eq!(tables.verbs.len(), 1);
        assert_eq!(stats.occurrences, 2);
    }

    #[test]
    fn filtered_occurrences_keep_their_registrations() {
        let mut builder = CorpusBuilder::new(7);
        for i in 0..100 {
            let mut record = sample_verb();
            record.node = 1000 + i;
            record.lemma = "אמר".to_string();
            record.lemma_frequency = 5000;
            record.gloss = "say".to_string();
            builder.process(record).unwrap();
        }

        // thinned at 2/3, so some dropped and some kept
        assert!(builder.dropped > 0);
        assert!(!builder.occurrences.is_empty());
        assert_eq!(builder.roots.count_of("אמר"), Some(100));
        assert_eq!(builder.verses.len(), 1);

        let (tables, stats) = builder.finish().unwrap();
        assert_eq!(tables.roots.len(), 1);
        assert_eq!(
            u64::try_from(stats.occurrences).unwrap() + stats.dropped,
            100
        );
    }

    #[test]
    fn ids_follow_occurrence_counts() {
        let mut builder = CorpusBuilder::new(0);

        for i in 0..3 {
            let mut record = sample_verb();
            record.node = 10 + i;
            record.stem = "piel".to_string();
            record.tense = "impf".to_string();
            record.lemma = "דבר".to_string();
            record.gloss = "speak".to_string();
            record.surface = "יְדַבֵּר".to_string();
            record.verse = 1 + i;
            builder.process(record).unwrap();
        }

        let mut record = sample_verb();
        record.node = 20;
        record.tense = "impf".to_string();
        record.surface = "יִקְטֹל".to_string();
        record.book = "Exodus".to_string();
        builder.process(record).unwrap();

        let (tables, _) = builder.finish().unwrap();

        // the three-occurrence root ranks first
        assert_eq!(tables.roots[0].2, "speak");
        assert_eq!(tables.roots[1].2, "kill");
        assert_eq!(tables.books[0], BookRow("Genesis".to_string()));
        assert_eq!(tables.books[1], BookRow("Exodus".to_string()));
        assert_eq!(tables.occurrences.len(), 4);

        // every cross-reference resolves inside its table
        for occurrence in &tables.occurrences {
            assert!((occurrence.verb as usize) < tables.verbs.len());
            assert!((occurrence.verse as usize) < tables.verses.len());
            for parsing in &occurrence.parsings {
                assert!((*parsing as usize) < tables.parsings.len());
            }
        }
    }

    #[test]
    fn disagreeing_secondary_analysis_is_appended() {
        let mut builder = CorpusBuilder::new(0);
        let mut record = sample_verb();
        // tagged says 3ms, positional says 3fs
        record.morph_code = Some("HVqp3fs".to_string());
        builder.process(record).unwrap();

        assert_eq!(builder.parsings.len(), 2);
        assert_eq!(builder.occurrences[0].parsing_keys.len(), 2);

        let mut builder = CorpusBuilder::new(0);
        let mut record = sample_verb();
        record.morph_code = Some("HVqp3ms".to_string());
        builder.process(record).unwrap();

        // agreeing secondary is folded into the primary
        assert_eq!(builder.parsings.len(), 1);
        assert_eq!(builder.occurrences[0].parsing_keys.len(), 1);
    }
}
