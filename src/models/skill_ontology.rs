use crate::constants::EMBEDDED_SKILL_ONTOLOGY_CSV;
use crate::models::{SkillCategory, TextNormalizer};
use crate::types::{CanonicalSkillId, SkillAlias, SkillDefinitionList, SkillDisplayName};
use crate::utils::{format_skill_name, read_skill_definitions, read_skill_definitions_from_path};
use crate::Error;
use log::{info, warn};
use std::collections::{BTreeSet, HashMap};
use std::io::Read;
use std::path::Path;

/// A canonical skill with its normalized aliases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillOntologyEntry {
    pub canonical_id: CanonicalSkillId,
    pub display_name: SkillDisplayName,
    /// Normalized (lemma-joined) alias strings, including the normalized
    /// canonical id and display name.
    pub aliases: BTreeSet<SkillAlias>,
    pub category: SkillCategory,
}

/// In-memory canonical skill vocabulary with alias resolution.
///
/// Immutable after construction; lookups take `&self`, so one ontology may be
/// shared across threads without locking.
#[derive(Debug, Clone)]
pub struct SkillOntology {
    normalizer: TextNormalizer,
    entries: Vec<SkillOntologyEntry>,
    alias_map: HashMap<SkillAlias, usize>,
    canonical_id_map: HashMap<CanonicalSkillId, usize>,
    longest_alias_length: usize,
}

impl SkillOntology {
    /// Builds an ontology using the default `TextNormalizer`.
    ///
    /// # Errors
    /// Returns `Error::ConfigurationError` if a canonical id appears twice, if
    /// two aliases collide on different canonical ids, or if an alias
    /// normalizes to nothing.
    pub fn new(definitions: &SkillDefinitionList) -> Result<Self, Error> {
        Self::with_normalizer(definitions, TextNormalizer::default())
    }

    /// Builds an ontology whose aliases, and the documents matched against
    /// it, are normalized with the given normalizer.
    pub fn with_normalizer(
        definitions: &SkillDefinitionList,
        normalizer: TextNormalizer,
    ) -> Result<Self, Error> {
        let mut instance = SkillOntology {
            normalizer,
            entries: Vec::with_capacity(definitions.len()),
            alias_map: HashMap::new(),
            canonical_id_map: HashMap::with_capacity(definitions.len()),
            longest_alias_length: 0,
        };

        instance.ingest_definitions(definitions)?;

        info!(
            "Loaded skill ontology with {} skills and {} aliases",
            instance.entries.len(),
            instance.alias_map.len()
        );

        Ok(instance)
    }

    /// Loads the skill vocabulary compiled into the crate.
    pub fn embedded() -> Result<Self, Error> {
        Self::from_csv_str(EMBEDDED_SKILL_ONTOLOGY_CSV)
    }

    /// Builds an ontology from a CSV string with `Skill Id`, `Display Name`,
    /// `Category` and `Aliases` columns.
    pub fn from_csv_str(csv: &str) -> Result<Self, Error> {
        Self::from_reader(csv.as_bytes())
    }

    /// Builds an ontology from any CSV source.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let definitions = read_skill_definitions(reader)?;

        Self::new(&definitions)
    }

    /// Builds an ontology from a CSV file. Paths ending in `.gz` are
    /// decompressed first.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let definitions = read_skill_definitions_from_path(path)?;

        Self::new(&definitions)
    }

    fn ingest_definitions(&mut self, definitions: &SkillDefinitionList) -> Result<(), Error> {
        for (canonical_id, display_name, category, aliases) in definitions {
            let canonical_id = canonical_id.trim().to_string();

            if canonical_id.is_empty() {
                return Err(Error::ConfigurationError(
                    "Skill definition with an empty canonical id".to_string(),
                ));
            }

            if self.canonical_id_map.contains_key(&canonical_id) {
                return Err(Error::ConfigurationError(format!(
                    "Duplicate canonical skill id: {}",
                    canonical_id
                )));
            }

            let display_name = match display_name {
                Some(name) if !name.trim().is_empty() => name.trim().to_string(),
                _ => format_skill_name(&canonical_id),
            };

            let entry_index = self.entries.len();
            let mut normalized_aliases = BTreeSet::new();

            for alias in [&canonical_id, &display_name].into_iter().chain(aliases) {
                let normalized_alias = self.normalizer.normalize_phrase(alias);

                if normalized_alias.is_empty() {
                    return Err(Error::ConfigurationError(format!(
                        "Alias {:?} of skill {} normalizes to an empty phrase",
                        alias, canonical_id
                    )));
                }

                self.insert_alias(&normalized_alias, entry_index, &canonical_id)?;
                normalized_aliases.insert(normalized_alias);
            }

            self.canonical_id_map
                .insert(canonical_id.clone(), entry_index);
            self.entries.push(SkillOntologyEntry {
                canonical_id,
                display_name,
                aliases: normalized_aliases,
                category: *category,
            });
        }

        Ok(())
    }

    fn insert_alias(
        &mut self,
        normalized_alias: &str,
        entry_index: usize,
        canonical_id: &CanonicalSkillId,
    ) -> Result<(), Error> {
        match self.alias_map.get(normalized_alias) {
            Some(&existing_index) if existing_index != entry_index => {
                return Err(Error::ConfigurationError(format!(
                    "Alias {:?} maps to both {} and {}",
                    normalized_alias, self.entries[existing_index].canonical_id, canonical_id
                )));
            }
            Some(_) => return Ok(()),
            None => {}
        }

        let alias_token_count = normalized_alias.split(' ').count();
        if alias_token_count == 1 && self.normalizer.is_stop_word(normalized_alias) {
            warn!(
                "Alias {:?} of skill {} is a stop word and will only match inside phrases",
                normalized_alias, canonical_id
            );
        }

        self.longest_alias_length = self.longest_alias_length.max(alias_token_count);
        self.alias_map
            .insert(normalized_alias.to_string(), entry_index);

        Ok(())
    }

    /// Resolves a normalized phrase to its canonical skill id.
    ///
    /// Matching is exact after lowercasing and collapsing whitespace; no
    /// fuzzy matching is performed here.
    pub fn lookup(&self, normalized_phrase: &str) -> Option<&CanonicalSkillId> {
        self.lookup_entry(normalized_phrase)
            .map(|entry| &entry.canonical_id)
    }

    /// Resolves a normalized phrase to its full ontology entry.
    pub fn lookup_entry(&self, normalized_phrase: &str) -> Option<&SkillOntologyEntry> {
        let key = normalized_phrase
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(" ");

        self.alias_map
            .get(&key)
            .map(|&entry_index| &self.entries[entry_index])
    }

    /// Retrieves the entry for a canonical skill id.
    pub fn entry(&self, canonical_id: &str) -> Option<&SkillOntologyEntry> {
        self.canonical_id_map
            .get(canonical_id)
            .map(|&entry_index| &self.entries[entry_index])
    }

    pub fn display_name(&self, canonical_id: &str) -> Option<&SkillDisplayName> {
        self.entry(canonical_id).map(|entry| &entry.display_name)
    }

    /// All entries, in definition order.
    pub fn all_entries(&self) -> &[SkillOntologyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Token count of the longest normalized alias.
    pub fn longest_alias_length(&self) -> usize {
        self.longest_alias_length
    }

    /// The normalizer aliases were built with. Documents must be normalized
    /// with the same one for lookups to line up.
    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }
}
