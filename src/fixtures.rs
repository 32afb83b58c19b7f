//! Fixture data loading.
//!
//! The browser reads its catalogue once at startup. Jobs come as a JSON array of
//! job objects; movies come as TMDB-style pages (`{"results": [...]}`) that are
//! concatenated in the order given. Copies of both fixtures are compiled into the
//! binary and used when no file is configured.

use std::path::Path;

use serde::Deserialize;

use crate::domain::{FavorisError, Job, Movie, Result};

const BUNDLED_JOBS: &str = include_str!("../fixtures/jobs.json");
const BUNDLED_MOVIE_PAGES: [&str; 2] = [
    include_str!("../fixtures/popular_movies_p1.json"),
    include_str!("../fixtures/popular_movies_p2.json"),
];

/// One page of a paged fixture. Pagination metadata is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    pub results: Vec<T>,
}

/// Parses a job array.
///
/// # Errors
///
/// Returns [`FavorisError::Fixture`] if the JSON is not an array of jobs.
pub fn parse_jobs(json: &str) -> Result<Vec<Job>> {
    serde_json::from_str(json).map_err(|e| FavorisError::Fixture(format!("invalid job list: {e}")))
}

/// Parses one movie page.
///
/// # Errors
///
/// Returns [`FavorisError::Fixture`] if the JSON has no `results` array of movies.
pub fn parse_movie_page(json: &str) -> Result<Vec<Movie>> {
    let page: Page<Movie> = serde_json::from_str(json)
        .map_err(|e| FavorisError::Fixture(format!("invalid movie page: {e}")))?;
    Ok(page.results)
}

/// Reads and parses a job fixture file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_jobs(path: impl AsRef<Path>) -> Result<Vec<Job>> {
    let path = path.as_ref();
    let _span = tracing::debug_span!("load_jobs", path = ?path).entered();

    let jobs = parse_jobs(&std::fs::read_to_string(path)?)?;
    tracing::debug!(count = jobs.len(), "jobs loaded");
    Ok(jobs)
}

/// Reads movie pages and concatenates their results in order.
///
/// # Errors
///
/// Returns an error if any page cannot be read or parsed.
pub fn load_movie_pages<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Movie>> {
    let mut movies = Vec::new();
    for path in paths {
        let path = path.as_ref();
        let page = parse_movie_page(&std::fs::read_to_string(path)?)?;
        tracing::debug!(path = ?path, count = page.len(), "movie page loaded");
        movies.extend(page);
    }
    Ok(movies)
}

/// Job fixture shipped with the binary.
///
/// # Errors
///
/// Only fails if the embedded fixture is malformed.
pub fn bundled_jobs() -> Result<Vec<Job>> {
    parse_jobs(BUNDLED_JOBS)
}

/// Movie pages shipped with the binary, concatenated.
///
/// # Errors
///
/// Only fails if an embedded fixture is malformed.
pub fn bundled_movies() -> Result<Vec<Movie>> {
    let mut movies = Vec::new();
    for page in BUNDLED_MOVIE_PAGES {
        movies.extend(parse_movie_page(page)?);
    }
    Ok(movies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn bundled_fixtures_parse() {
        let jobs = bundled_jobs().unwrap();
        assert_eq!(jobs.len(), 5);
        assert_eq!(jobs[0].poste, "Ingénieur Logiciel");

        let movies = bundled_movies().unwrap();
        assert_eq!(movies.len(), 4);
        assert_eq!(movies[2].title, "Oppenheimer");
    }

    #[test]
    fn pages_are_concatenated_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("p1.json");
        let second = dir.path().join("p2.json");
        std::fs::write(&first, r#"{"results": [{"id": 1, "title": "Un"}]}"#).unwrap();
        std::fs::write(&second, r#"{"page": 2, "results": [{"id": 2, "title": "Deux"}]}"#).unwrap();

        let movies = load_movie_pages(&[&second, &first]).unwrap();
        let ids: Vec<i64> = movies.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn job_file_round_trip_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": "x", "poste": "Boulanger", "entreprise": "Fournil", "ville": "Caen"}}]"#).unwrap();

        let jobs = load_jobs(file.path()).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].poste, "Boulanger");
        assert!(jobs[0].code_postal.is_none());
    }

    #[test]
    fn wrong_shape_is_a_fixture_error() {
        let err = parse_jobs(r#"{"results": []}"#).unwrap_err();
        assert!(matches!(err, FavorisError::Fixture(_)));

        let err = parse_movie_page("[]").unwrap_err();
        assert!(matches!(err, FavorisError::Fixture(_)));

        let err = parse_jobs("[{").unwrap_err();
        assert!(matches!(err, FavorisError::Fixture(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_jobs(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, FavorisError::Io(_)));
    }
}
