use log::{error, info};
use skill_sniffer::{
    sort_skills, Error, MatchResult, OverlapScorer, SkillExtractor, SkillOntology, SkillSet,
    DEFAULT_SKILL_EXTRACTOR_CONFIG,
};
use std::io::{self, Read};
use std::{env, fs};

struct CliArgs {
    ontology_path: Option<String>,
    job_file_path: Option<String>,
}

fn main() {
    // Initialize the logger
    env_logger::init();

    let cli_args = match parse_args(env::args().skip(1)) {
        Ok(cli_args) => cli_args,
        Err(e) => {
            error!("{}", e);
            eprintln!("Usage: skill-sniffer-cli [--ontology PATH] [JOB_FILE] < RESUME_FILE");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&cli_args) {
        error!("Error extracting skills: {}", e);
        std::process::exit(1);
    }
}

fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<CliArgs, String> {
    let mut cli_args = CliArgs {
        ontology_path: None,
        job_file_path: None,
    };

    while let Some(arg) = args.next() {
        if arg == "--ontology" {
            let path = args
                .next()
                .ok_or_else(|| "--ontology requires a path".to_string())?;
            cli_args.ontology_path = Some(path);
        } else if arg.starts_with("--") {
            return Err(format!("Unknown option: {}", arg));
        } else if cli_args.job_file_path.is_none() {
            cli_args.job_file_path = Some(arg);
        } else {
            return Err(format!("Unexpected argument: {}", arg));
        }
    }

    Ok(cli_args)
}

fn run(cli_args: &CliArgs) -> Result<(), Error> {
    let ontology = match &cli_args.ontology_path {
        Some(path) => SkillOntology::from_path(path)?,
        None => SkillOntology::embedded()?,
    };

    let skill_extractor = SkillExtractor::new(&ontology, &DEFAULT_SKILL_EXTRACTOR_CONFIG)?;

    // Read the resume text from stdin
    let mut resume_text = String::new();
    io::stdin().read_to_string(&mut resume_text)?;

    let resume_set = skill_extractor.extract_text("stdin", &resume_text);
    print_skill_set(&resume_set, &ontology);

    if let Some(job_file_path) = &cli_args.job_file_path {
        info!("Comparing against job description {}", job_file_path);

        let job_text = fs::read_to_string(job_file_path)?;
        let job_set = skill_extractor.extract_text(job_file_path, &job_text);
        let match_result = OverlapScorer::score(&resume_set, &job_set);

        println!();
        print_skill_set(&job_set, &ontology);
        println!();
        print_match_result(&match_result, &ontology);
    }

    Ok(())
}

fn print_skill_set(skill_set: &SkillSet, ontology: &SkillOntology) {
    println!("Skills ({}): {}", skill_set.document_id, skill_set.len());

    for (canonical_id, evidence) in sort_skills(skill_set) {
        println!(
            "  {} ({}): confidence {:.2}, frequency {}",
            canonical_id,
            display_name(canonical_id, ontology),
            evidence.confidence,
            evidence.frequency()
        );
    }
}

fn print_match_result(match_result: &MatchResult, ontology: &SkillOntology) {
    let format_ids = |canonical_ids: &std::collections::BTreeSet<String>| {
        canonical_ids
            .iter()
            .map(|canonical_id| display_name(canonical_id, ontology))
            .collect::<Vec<_>>()
            .join(", ")
    };

    println!("Match: {:.2}%", match_result.match_percentage());
    println!("  Matched: {}", format_ids(&match_result.matched));
    println!("  Resume only: {}", format_ids(&match_result.resume_only));
    println!("  Job only: {}", format_ids(&match_result.job_only));

    for (category, overlap) in &match_result.categories {
        println!(
            "  {}: {:.2}% (missing: {})",
            category,
            overlap.score * 100.0,
            format_ids(&overlap.missing)
        );
    }
}

fn display_name<'a>(canonical_id: &'a str, ontology: &'a SkillOntology) -> &'a str {
    ontology
        .display_name(canonical_id)
        .map(String::as_str)
        .unwrap_or(canonical_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs, String> {
        parse_args(args.iter().map(|arg| arg.to_string()))
    }

    #[test]
    fn test_no_arguments() {
        let cli_args = parse(&[]).unwrap();

        assert!(cli_args.ontology_path.is_none());
        assert!(cli_args.job_file_path.is_none());
    }

    #[test]
    fn test_ontology_and_job_file() {
        let cli_args = parse(&["--ontology", "skills.csv.gz", "job.txt"]).unwrap();

        assert_eq!(cli_args.ontology_path.as_deref(), Some("skills.csv.gz"));
        assert_eq!(cli_args.job_file_path.as_deref(), Some("job.txt"));

        let cli_args = parse(&["job.txt", "--ontology", "skills.csv"]).unwrap();

        assert_eq!(cli_args.ontology_path.as_deref(), Some("skills.csv"));
        assert_eq!(cli_args.job_file_path.as_deref(), Some("job.txt"));
    }

    #[test]
    fn test_ontology_without_path_is_rejected() {
        let err = parse(&["--ontology"]).err().unwrap();

        assert_eq!(err, "--ontology requires a path");
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        let err = parse(&["--verbose", "job.txt"]).err().unwrap();

        assert_eq!(err, "Unknown option: --verbose");
    }

    #[test]
    fn test_extra_positional_argument_is_rejected() {
        let err = parse(&["job.txt", "other.txt"]).err().unwrap();

        assert_eq!(err, "Unexpected argument: other.txt");
    }
}
