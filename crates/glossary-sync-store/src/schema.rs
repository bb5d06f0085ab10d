use rusqlite_migration::{M, Migrations};

pub fn migrations() -> Migrations<'static> {
    Migrations::new(vec![M::up(
        "CREATE TABLE translation_sets (
            id          INTEGER PRIMARY KEY,
            locale      TEXT NOT NULL,
            name        TEXT NOT NULL
        );

        CREATE INDEX idx_translation_sets_locale ON translation_sets(locale);

        CREATE TABLE glossaries (
            id                  INTEGER PRIMARY KEY,
            translation_set_id  INTEGER NOT NULL,
            FOREIGN KEY (translation_set_id) REFERENCES translation_sets(id)
        );

        CREATE TABLE glossary_entries (
            id              INTEGER PRIMARY KEY,
            glossary_id     INTEGER NOT NULL,
            term            TEXT NOT NULL,
            translation     TEXT NOT NULL,
            part_of_speech  TEXT NOT NULL DEFAULT '',
            comment         TEXT NOT NULL DEFAULT '',
            last_edited_by  INTEGER NOT NULL,
            FOREIGN KEY (glossary_id) REFERENCES glossaries(id)
        );

        CREATE INDEX idx_glossary_entries_term ON glossary_entries(glossary_id, term);

        CREATE TABLE actors (
            id          INTEGER PRIMARY KEY,
            username    TEXT NOT NULL UNIQUE,
            role        TEXT NOT NULL
        );

        CREATE TABLE settings (
            key     TEXT PRIMARY KEY,
            value   TEXT NOT NULL
        );",
    )])
}
