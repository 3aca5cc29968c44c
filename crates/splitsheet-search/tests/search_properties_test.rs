//! Catalog-wide properties of the query engine, checked against the
//! bundled seed catalog and small hand-built catalogs.

use std::collections::HashSet;

use splitsheet_core::model::{Contributor, Song};
use splitsheet_core::Catalog;
use splitsheet_search::{search, ResultType, SearchRequest};

fn matches_query(song: &Song, query: &str) -> bool {
    let q = query.to_lowercase();
    song.title.to_lowercase().contains(&q)
        || song.iswc.as_str().to_lowercase().contains(&q)
        || song.writers.iter().any(|w| w.name.to_lowercase().contains(&q))
        || song.publishers.iter().any(|p| p.name.to_lowercase().contains(&q))
}

/// Four songs with six writer slots, one writer on two songs.
fn four_song_catalog() -> Catalog {
    let shared = Contributor::writer("w2", "Freddie Mercury");
    Catalog::from_songs(vec![
        Song::new("1", "Moonlight Sonata")
            .with_iswc("T-123456789-0")
            .with_writer(Contributor::writer("w1", "Ludwig van Beethoven"))
            .with_publisher(Contributor::publisher("p1", "Classical Music Publishing")),
        Song::new("2", "Bohemian Rhapsody")
            .with_iswc("T-987654321-0")
            .with_writer(shared.clone())
            .with_publisher(Contributor::publisher("p2", "Queen Music Ltd")),
        Song::new("3", "Yesterday")
            .with_iswc("T-456789123-0")
            .with_writer(Contributor::writer("w3", "Paul McCartney"))
            .with_writer(Contributor::writer("w4", "John Lennon"))
            .with_publisher(Contributor::publisher("p3", "Sony/ATV Music Publishing")),
        Song::new("5", "New Song Title")
            .with_writer(shared)
            .with_writer(Contributor::writer("w7", "Brian May"))
            .with_publisher(Contributor::publisher("p2", "Queen Music Ltd")),
    ])
    .unwrap()
}

#[test]
fn test_filter_is_sound_and_complete() {
    let catalog = Catalog::seed().unwrap();
    let queries = ["", "o", "yes", "MUSIC", "t-9", "mercury", "pending", "sony/atv", "xyz"];

    for query in queries {
        let result = search(&catalog, query, ResultType::Songs);

        for song in &result.songs {
            assert!(matches_query(song, query), "'{}' should not match {}", query, song.title);
        }

        let expected: Vec<&str> = catalog
            .songs()
            .iter()
            .filter(|song| matches_query(song, query))
            .map(|song| song.id.as_str())
            .collect();
        let actual: Vec<&str> = result.songs.iter().map(|song| song.id.as_str()).collect();
        assert_eq!(actual, expected, "query '{}'", query);
    }
}

#[test]
fn test_contributors_are_deduplicated() {
    let catalog = Catalog::seed().unwrap();
    let result = search(&catalog, "", ResultType::Writers);

    let writer_ids: HashSet<&str> = result.writers.iter().map(|w| w.id.as_str()).collect();
    assert_eq!(writer_ids.len(), result.writers.len());

    let publisher_ids: HashSet<&str> = result.publishers.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(publisher_ids.len(), result.publishers.len());
}

#[test]
fn test_empty_query_returns_whole_catalog() {
    let catalog = Catalog::seed().unwrap();
    let result = search(&catalog, "", ResultType::Songs);

    assert_eq!(result.songs.len(), catalog.len());
    // w1..w6 and p1..p4, with Freddie Mercury and Queen Music Ltd repeated
    assert_eq!(result.writers.len(), 6);
    assert_eq!(result.publishers.len(), 4);
    assert_eq!(
        result.total_results,
        result.songs.len() + result.writers.len() + result.publishers.len()
    );
}

#[test]
fn test_repeated_writer_counted_once() {
    let result = search(&four_song_catalog(), "", ResultType::Writers);

    assert_eq!(result.writers.len(), 5);
    let ids: Vec<&str> = result.writers.iter().map(|w| w.id.as_str()).collect();
    assert_eq!(ids, vec!["w1", "w2", "w3", "w4", "w7"]);
}

#[test]
fn test_total_counts_every_category() {
    let catalog = four_song_catalog();
    for result_type in ResultType::ALL {
        let result = search(&catalog, "queen", result_type);
        // Two Queen songs, two writers, one publisher
        assert_eq!(result.songs.len(), 2);
        assert_eq!(result.total_results, 5);
        assert_eq!(result.result_type, result_type);
    }
}

#[test]
fn test_no_match_returns_zero() {
    let catalog = Catalog::seed().unwrap();
    let result = search(&catalog, "no song is called this", ResultType::Songs);
    assert!(result.songs.is_empty());
    assert!(result.writers.is_empty());
    assert!(result.publishers.is_empty());
    assert_eq!(result.total_results, 0);
}

#[test]
fn test_output_order_is_stable() {
    let catalog = Catalog::seed().unwrap();
    let first = search(&catalog, "music", ResultType::Publishers);
    for _ in 0..5 {
        assert_eq!(search(&catalog, "music", ResultType::Publishers), first);
    }
}

#[test]
fn test_request_from_url_params_matches_direct_search() {
    let catalog = Catalog::seed().unwrap();
    let request = SearchRequest::from_params([("q", "sheeran"), ("type", "writers")]);
    let result = request.run(&catalog);

    assert_eq!(result, search(&catalog, "sheeran", ResultType::Writers));
    let names: Vec<&str> = result.writers.iter().map(|w| w.name.as_str()).collect();
    assert_eq!(names, vec!["Ed Sheeran", "Steve Mac"]);
}

#[test]
fn test_result_serializes_for_presentation_layer() {
    let catalog = Catalog::seed().unwrap();
    let result = search(&catalog, "yesterday", ResultType::Songs);
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["result_type"], "songs");
    assert_eq!(json["total_results"], 4);
    assert_eq!(json["songs"][0]["iswc"], "T-456789123-0");
}
