use crate::constants::{
    ONTOLOGY_HEADER_ALIASES, ONTOLOGY_HEADER_CATEGORY, ONTOLOGY_HEADER_DISPLAY_NAME,
    ONTOLOGY_HEADER_SKILL_ID,
};
use crate::models::SkillCategory;
use crate::types::SkillDefinitionList;
use crate::Error;
use csv::{ReaderBuilder, StringRecord};
use flate2::read::GzDecoder;
use log::debug;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Reads skill definitions from a CSV source.
///
/// The source must have `Skill Id`, `Display Name`, `Category` and `Aliases`
/// headers; `Aliases` is a comma-separated list within a single field.
pub fn read_skill_definitions<R: Read>(reader: R) -> Result<SkillDefinitionList, Error> {
    let mut skill_definitions = SkillDefinitionList::new();

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();

    let skill_id_column = header_position(&headers, ONTOLOGY_HEADER_SKILL_ID)?;
    let display_name_column = header_position(&headers, ONTOLOGY_HEADER_DISPLAY_NAME)?;
    let category_column = header_position(&headers, ONTOLOGY_HEADER_CATEGORY)?;
    let aliases_column = header_position(&headers, ONTOLOGY_HEADER_ALIASES)?;

    for record in reader.records() {
        let record = record?;

        let skill_id = record
            .get(skill_id_column)
            .ok_or_else(|| Error::ParserError("Missing 'Skill Id' field".to_string()))?;

        let display_name = record
            .get(display_name_column)
            .filter(|name| !name.is_empty())
            .map(|name| name.to_string());

        let category: SkillCategory = record
            .get(category_column)
            .ok_or_else(|| Error::ParserError("Missing 'Category' field".to_string()))?
            .parse()?;

        let aliases: Vec<String> = match record.get(aliases_column) {
            Some(names) => names
                .split(',')
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .collect(),
            None => Vec::new(),
        };

        skill_definitions.push((skill_id.to_string(), display_name, category, aliases));
    }

    debug!("Read {} skill definitions", skill_definitions.len());

    Ok(skill_definitions)
}

/// Reads skill definitions from a CSV file, decompressing it when the path
/// ends in `.gz`.
pub fn read_skill_definitions_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<SkillDefinitionList, Error> {
    let path = path.as_ref();
    let file = BufReader::new(File::open(path)?);

    let is_compressed = path
        .extension()
        .map_or(false, |extension| extension.eq_ignore_ascii_case("gz"));

    if is_compressed {
        read_skill_definitions(GzDecoder::new(file))
    } else {
        read_skill_definitions(file)
    }
}

fn header_position(headers: &StringRecord, name: &str) -> Result<usize, Error> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or_else(|| Error::ParserError(format!("Missing '{}' header", name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    const CSV: &str = "Skill Id,Display Name,Category,Aliases\n\
        javascript,JavaScript,programming_languages,\"js, ecmascript\"\n\
        docker,,cloud_devops,\n";

    #[test]
    fn test_reads_definitions() {
        let definitions = read_skill_definitions(CSV.as_bytes()).unwrap();

        assert_eq!(definitions.len(), 2);
        assert_eq!(
            definitions[0],
            (
                "javascript".to_string(),
                Some("JavaScript".to_string()),
                SkillCategory::ProgrammingLanguages,
                vec!["js".to_string(), "ecmascript".to_string()]
            )
        );
        assert_eq!(
            definitions[1],
            ("docker".to_string(), None, SkillCategory::CloudDevops, vec![])
        );
    }

    #[test]
    fn test_missing_header_is_a_parser_error() {
        let result = read_skill_definitions("Skill Id,Category\npython,databases\n".as_bytes());

        assert!(matches!(result, Err(Error::ParserError(_))));
    }

    #[test]
    fn test_unknown_category_is_a_configuration_error() {
        let csv = "Skill Id,Display Name,Category,Aliases\npython,Python,snakes,\n";
        let result = read_skill_definitions(csv.as_bytes());

        assert!(matches!(result, Err(Error::ConfigurationError(_))));
    }

    #[test]
    fn test_reads_gzip_compressed_files() {
        let path = std::env::temp_dir().join(format!(
            "skill_sniffer_ontology_{}.csv.gz",
            std::process::id()
        ));

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(CSV.as_bytes()).unwrap();
        std::fs::write(&path, encoder.finish().unwrap()).unwrap();

        let definitions = read_skill_definitions_from_path(&path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(definitions.unwrap().len(), 2);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = read_skill_definitions_from_path("does/not/exist.csv");

        assert!(matches!(result, Err(Error::IoError(_))));
    }
}
