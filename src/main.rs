use std::path::PathBuf;

use clap::Parser;
use dotenvy::dotenv;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use rh_matching::api::MatchResponse;
use rh_matching::fuzzy::FuzzyMatcher;
use rh_matching::logging::init_tracing;
use rh_matching::matching::MatchingEngine;
use rh_matching::search::SearchRanker;
use rh_matching::{CandidateProfile, JobOffer};

/// Évalue un profil candidat contre un lot d'offres, avec recherche
/// plein-texte optionnelle sur les offres.
#[derive(Debug, Parser)]
#[command(name = "rh-match", about = "Scoring candidat/offres sur fichiers JSON")]
struct Cli {
    /// Profil candidat (JSON)
    #[arg(long, env = "RH_PROFILE")]
    profile: PathBuf,

    /// Offres à évaluer (JSON, liste)
    #[arg(long, env = "RH_OFFERS")]
    offers: PathBuf,

    /// Requête de recherche: filtre et classe les offres avant scoring
    #[arg(long)]
    query: Option<String>,

    /// Seuil de similarité pour la recherche floue
    #[arg(long, default_value_t = 0.6)]
    threshold: f64,
}

/// Enregistrement cherchable: l'offre plus ses champs textuels tels que
/// la plateforme les stocke.
#[derive(Debug, Clone, Deserialize)]
struct OfferRecord {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(flatten)]
    offer: JobOffer,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("lecture de {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("JSON invalide dans {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

fn load_json<T: serde::de::DeserializeOwned>(path: &PathBuf) -> Result<T, CliError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::Parse {
        path: path.clone(),
        source,
    })
}

fn main() -> Result<(), CliError> {
    dotenv().ok();
    init_tracing("rh-match");

    let cli = Cli::parse();
    let profile: CandidateProfile = load_json(&cli.profile)?;
    let records: Vec<OfferRecord> = load_json(&cli.offers)?;
    info!(offers = records.len(), "offres chargées");

    let ranker = SearchRanker::new(FuzzyMatcher::new());
    let records = match cli.query.as_deref() {
        Some(query) => ranker.rank(
            query,
            records,
            |record: &OfferRecord| vec![record.title.clone(), record.description.clone()],
            cli.threshold,
        ),
        None => records,
    };

    let engine = MatchingEngine::new();
    for record in &records {
        let result = engine.calculate_match(&profile, &record.offer);
        let response = MatchResponse::from_result(&result);
        println!(
            "{:>5.1}  [{}]  {}  — {}",
            response.overall_score, response.match_level_label, record.title, response.explanation
        );
    }

    Ok(())
}
