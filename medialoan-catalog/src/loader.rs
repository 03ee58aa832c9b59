use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::io::BufRead;

use medialoan_core::{ContentItem, ContentKind};

use crate::error::CatalogError;

/// A freshly parsed inventory: items in file order plus the genre set
/// accumulated across all records.
#[derive(Debug, Clone)]
pub struct ParsedCatalog {
    pub items: Vec<ContentItem>,
    pub categories: BTreeSet<String>,
}

/// Parse a pipe-delimited catalog file.
///
/// One record per line:
///
/// ```text
/// id|kind|title|director|description|genre1;genre2|releaseYear|isAvailable|<kind-specific...>
/// ```
///
/// Movie kind-specific columns: `runtimeMinutes|hasCreditScenes`.
/// Series kind-specific columns: `totalEpisodes|season=count,season=count`.
///
/// Lines with an unrecognized kind discriminator are skipped; their genres
/// are not registered and later lines parse normally. Any malformed record
/// fails the entire load.
pub fn parse_catalog<R: BufRead>(reader: R) -> Result<ParsedCatalog, CatalogError> {
    let mut items: Vec<ContentItem> = Vec::new();
    let mut categories: BTreeSet<String> = BTreeSet::new();
    let mut seen_ids: HashSet<u32> = HashSet::new();

    for (idx, line_result) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line_result?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let fields: Vec<&str> = trimmed.split('|').collect();
        if fields.len() < 8 {
            return Err(CatalogError::parse(
                line_no,
                format!("expected at least 8 fields, got {}", fields.len()),
            ));
        }

        let kind_field = fields[1];
        let kind = match kind_field {
            "Movie" => parse_movie_fields(&fields, line_no)?,
            "Series" => parse_series_fields(&fields, line_no)?,
            other => {
                log::debug!("line {line_no}: skipping unknown content kind {other:?}");
                continue;
            }
        };

        let id = parse_u32(fields[0], line_no, "id")?;
        if !seen_ids.insert(id) {
            return Err(CatalogError::DuplicateId { id, line: line_no });
        }

        let genres: Vec<String> = fields[5]
            .split(';')
            .map(|g| g.trim().to_string())
            .filter(|g| !g.is_empty())
            .collect();
        for genre in &genres {
            categories.insert(genre.clone());
        }

        let release_year = parse_u32(fields[6], line_no, "release year")?;
        let available = parse_bool(fields[7], line_no, "availability")?;

        items.push(ContentItem::new(
            id,
            fields[2],
            fields[3],
            fields[4],
            release_year,
            available,
            genres,
            kind,
        ));
    }

    log::info!(
        "loaded {} catalog items across {} categories",
        items.len(),
        categories.len()
    );

    Ok(ParsedCatalog { items, categories })
}

/// Parse a catalog from a file path.
pub fn load_catalog_file(path: &std::path::Path) -> Result<ParsedCatalog, CatalogError> {
    let file = std::fs::File::open(path)?;
    parse_catalog(std::io::BufReader::new(file))
}

fn parse_movie_fields(fields: &[&str], line_no: usize) -> Result<ContentKind, CatalogError> {
    if fields.len() != 10 {
        return Err(CatalogError::parse(
            line_no,
            format!("movie records have 10 fields, got {}", fields.len()),
        ));
    }
    Ok(ContentKind::Movie {
        runtime_minutes: parse_u32(fields[8], line_no, "runtime")?,
        has_credit_scenes: parse_bool(fields[9], line_no, "credit scenes flag")?,
    })
}

fn parse_series_fields(fields: &[&str], line_no: usize) -> Result<ContentKind, CatalogError> {
    if fields.len() != 10 {
        return Err(CatalogError::parse(
            line_no,
            format!("series records have 10 fields, got {}", fields.len()),
        ));
    }
    let total_episodes = parse_u32(fields[8], line_no, "total episodes")?;

    let mut episodes_per_season = BTreeMap::new();
    for pair in fields[9].split(',') {
        let pair = pair.trim();
        let Some((season, count)) = pair.split_once('=') else {
            return Err(CatalogError::parse(
                line_no,
                format!("expected season=count pair, got {pair:?}"),
            ));
        };
        let season = parse_u32(season, line_no, "season number")?;
        let count = parse_u32(count, line_no, "season episode count")?;
        episodes_per_season.insert(season, count);
    }

    Ok(ContentKind::Series {
        total_episodes,
        episodes_per_season,
    })
}

fn parse_u32(field: &str, line_no: usize, what: &str) -> Result<u32, CatalogError> {
    field
        .trim()
        .parse()
        .map_err(|_| CatalogError::parse(line_no, format!("invalid {what}: {field:?}")))
}

fn parse_bool(field: &str, line_no: usize, what: &str) -> Result<bool, CatalogError> {
    let trimmed = field.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(CatalogError::parse(
            line_no,
            format!("invalid {what}: {field:?}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
1|Movie|Inception|Christopher Nolan|A thief enters dreams|Sci-Fi; Thriller|2010|true|148|false
2|Series|Breaking Bad|Vince Gilligan|Chemistry teacher turns|Crime;Drama|2008|true|62|1=7,2=13,3=13,4=13,5=16
3|Movie|The Grand Budapest Hotel|Wes Anderson|A concierge and his lobby boy|Comedy|2014|false|99|true
";

    #[test]
    fn parses_items_in_file_order() {
        let parsed = parse_catalog(SAMPLE.as_bytes()).unwrap();
        assert_eq!(parsed.items.len(), 3);
        assert_eq!(
            parsed.items.iter().map(|i| i.id()).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(parsed.items[0].title, "Inception");
        assert!(parsed.items[0].is_available());
        assert!(!parsed.items[2].is_available());
    }

    #[test]
    fn genres_are_trimmed_and_collected() {
        let parsed = parse_catalog(SAMPLE.as_bytes()).unwrap();
        assert_eq!(
            parsed.items[0].genres,
            vec!["Sci-Fi".to_string(), "Thriller".to_string()]
        );
        let cats: Vec<&str> = parsed.categories.iter().map(String::as_str).collect();
        assert_eq!(cats, vec!["Comedy", "Crime", "Drama", "Sci-Fi", "Thriller"]);
    }

    #[test]
    fn movie_specific_fields() {
        let parsed = parse_catalog(SAMPLE.as_bytes()).unwrap();
        assert_eq!(
            parsed.items[0].kind,
            ContentKind::Movie {
                runtime_minutes: 148,
                has_credit_scenes: false,
            }
        );
        assert_eq!(
            parsed.items[2].kind,
            ContentKind::Movie {
                runtime_minutes: 99,
                has_credit_scenes: true,
            }
        );
    }

    #[test]
    fn series_season_map() {
        let parsed = parse_catalog(SAMPLE.as_bytes()).unwrap();
        let bb = &parsed.items[1];
        assert_eq!(bb.episodes_in_season(2), Some(13));
        assert_eq!(bb.episodes_in_season(5), Some(16));
        assert_eq!(bb.episodes_in_season(6), None);
        match &bb.kind {
            ContentKind::Series { total_episodes, .. } => assert_eq!(*total_episodes, 62),
            _ => panic!("expected a series"),
        }
    }

    #[test]
    fn unknown_kind_is_skipped() {
        let input = "\
1|Movie|Inception|Christopher Nolan|Dreams|Sci-Fi|2010|true|148|false
9|Documentary|Senna|Asif Kapadia|F1 driver|Sport|2010|true|106|false
3|Movie|Arrival|Denis Villeneuve|Linguist meets aliens|Sci-Fi|2016|true|116|false
";
        let parsed = parse_catalog(input.as_bytes()).unwrap();
        assert_eq!(parsed.items.len(), 2);
        assert_eq!(parsed.items[1].title, "Arrival");
        // The skipped line's genre is not registered
        assert!(!parsed.categories.contains("Sport"));
    }

    #[test]
    fn blank_lines_are_tolerated() {
        let input = "\n1|Movie|Inception|Nolan|Dreams|Sci-Fi|2010|true|148|false\n\n";
        let parsed = parse_catalog(input.as_bytes()).unwrap();
        assert_eq!(parsed.items.len(), 1);
    }

    #[test]
    fn bad_integer_fails_whole_load() {
        let input = "\
1|Movie|Inception|Nolan|Dreams|Sci-Fi|2010|true|148|false
2|Movie|Arrival|Villeneuve|Aliens|Sci-Fi|abcd|true|116|false
";
        let err = parse_catalog(input.as_bytes()).unwrap_err();
        match err {
            CatalogError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn bad_boolean_fails_whole_load() {
        let input = "1|Movie|Inception|Nolan|Dreams|Sci-Fi|2010|yes|148|false\n";
        assert!(matches!(
            parse_catalog(input.as_bytes()),
            Err(CatalogError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn wrong_field_count_fails_whole_load() {
        let input = "1|Movie|Inception|Nolan|Dreams|Sci-Fi|2010|true|148\n";
        assert!(matches!(
            parse_catalog(input.as_bytes()),
            Err(CatalogError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn bad_season_pair_fails_whole_load() {
        let input = "2|Series|Lost|Abrams|Island|Drama|2004|true|121|1-25\n";
        assert!(matches!(
            parse_catalog(input.as_bytes()),
            Err(CatalogError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn duplicate_id_fails_whole_load() {
        let input = "\
1|Movie|Inception|Nolan|Dreams|Sci-Fi|2010|true|148|false
1|Movie|Arrival|Villeneuve|Aliens|Sci-Fi|2016|true|116|false
";
        assert!(matches!(
            parse_catalog(input.as_bytes()),
            Err(CatalogError::DuplicateId { id: 1, line: 2 })
        ));
    }

    #[test]
    fn boolean_parsing_is_case_insensitive() {
        let input = "1|Movie|Inception|Nolan|Dreams|Sci-Fi|2010|TRUE|148|False\n";
        let parsed = parse_catalog(input.as_bytes()).unwrap();
        assert!(parsed.items[0].is_available());
    }
}
