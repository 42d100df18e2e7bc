use skill_sniffer::{extract_and_compare, sort_skills, SkillOntology};

fn main() {
    env_logger::init();

    let resume_text = "Backend engineer with 5 years of Python and PostgreSQL. \
        Deployed services to AWS with Docker. No experience with Kubernetes.";
    let job_text = "We need a Python developer who knows Docker, Kubernetes and AWS.";

    let ontology = SkillOntology::embedded().unwrap();
    let (resume_set, job_set, match_result) =
        extract_and_compare(resume_text, job_text, &ontology).unwrap();

    println!("Resume skills:");
    for (canonical_id, evidence) in sort_skills(&resume_set) {
        println!("  {}: {:.2}", canonical_id, evidence.confidence);
    }

    println!("Job skills: {:?}", job_set.canonical_ids());
    println!(
        "Match: {:.2}% (missing: {:?})",
        match_result.match_percentage(),
        match_result.job_only
    );
}
