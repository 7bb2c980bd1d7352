//! Story documents and the formats they can be written in.

use serde::{Deserialize, Serialize};
use std::path::Path;
use world_graph::RoomRecord;

use crate::error::SourceError;

/// Serialization format of a story document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryFormat {
    Xml,
    Toml,
    Json,
}

impl StoryFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, SourceError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "xml" => Ok(StoryFormat::Xml),
            "toml" => Ok(StoryFormat::Toml),
            "json" => Ok(StoryFormat::Json),
            _ => Err(SourceError::UnsupportedFormat(extension)),
        }
    }
}

/// The top-level `world` element: a title and rooms in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryDocument {
    #[serde(default)]
    pub title: String,

    #[serde(rename = "room", default)]
    pub rooms: Vec<RoomRecord>,
}

impl StoryDocument {
    /// Parse a document. Missing required room or object fields are errors.
    pub fn parse(input: &str, format: StoryFormat) -> Result<Self, SourceError> {
        let document: StoryDocument = match format {
            StoryFormat::Xml => quick_xml::de::from_str(input)?,
            StoryFormat::Toml => toml::from_str(input)?,
            StoryFormat::Json => serde_json::from_str(input)?,
        };
        Ok(document)
    }

    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use world_graph::{ObjectId, RoomId};

    const XML_STORY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<world>
    <title>SpaceWalk</title>
    <room>
        <name>Airlock</name>
        <id>1</id>
        <description>The outer door hisses.</description>
        <inventory>
            <object>
                <name>Helmet</name>
                <id>100</id>
                <description>Scratched visor.</description>
            </object>
            <object>
                <name>Tether</name>
                <id>101</id>
                <description>Twenty metres of cable.</description>
            </object>
        </inventory>
        <connections>
            <id>2</id>
            <id>3</id>
        </connections>
    </room>
    <room>
        <name>Corridor</name>
        <id>2</id>
        <description>Lights flicker overhead.</description>
        <inventory/>
        <connections/>
    </room>
    <room>
        <name>Hatch</name>
        <id>3</id>
        <description>Sealed tight.</description>
    </room>
</world>
"#;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            StoryFormat::from_path(Path::new("story.xml")).unwrap(),
            StoryFormat::Xml
        );
        assert_eq!(
            StoryFormat::from_path(Path::new("worlds/story.TOML")).unwrap(),
            StoryFormat::Toml
        );
        assert_eq!(
            StoryFormat::from_path(Path::new("story.json")).unwrap(),
            StoryFormat::Json
        );
        assert!(matches!(
            StoryFormat::from_path(Path::new("story.yaml")),
            Err(SourceError::UnsupportedFormat(ext)) if ext == "yaml"
        ));
        assert!(StoryFormat::from_path(Path::new("story")).is_err());
    }

    #[test]
    fn test_parse_xml() {
        let document = StoryDocument::parse(XML_STORY, StoryFormat::Xml).unwrap();

        assert_eq!(document.title, "SpaceWalk");
        assert_eq!(document.rooms.len(), 3);

        let airlock = &document.rooms[0];
        assert_eq!(airlock.id, RoomId(1));
        assert_eq!(airlock.name, "Airlock");
        assert_eq!(airlock.description, "The outer door hisses.");
        let objects: Vec<_> = airlock.inventory.objects.iter().map(|o| o.id).collect();
        assert_eq!(objects, vec![ObjectId(100), ObjectId(101)]);
        assert_eq!(airlock.connections.ids, vec![RoomId(2), RoomId(3)]);

        assert!(document.rooms[1].inventory.objects.is_empty());
        assert!(document.rooms[1].connections.ids.is_empty());
        assert!(document.rooms[2].connections.ids.is_empty());
    }

    #[test]
    fn test_parse_xml_rooms_interleaved_with_other_elements() {
        let input = r#"<world>
            <room><name>Airlock</name><id>1</id><description>Cold.</description></room>
            <title>SpaceWalk</title>
            <room><name>Corridor</name><id>2</id><description>Dark.</description></room>
            <note>Unused by the loader.</note>
            <room><name>Bridge</name><id>3</id><description>Quiet.</description></room>
        </world>"#;
        let document = StoryDocument::parse(input, StoryFormat::Xml).unwrap();

        assert_eq!(document.title, "SpaceWalk");
        let ids: Vec<_> = document.rooms.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![RoomId(1), RoomId(2), RoomId(3)]);
        assert_eq!(document.rooms[1].name, "Corridor");
    }

    #[test]
    fn test_parse_xml_missing_room_id() {
        let input = "<world><title>T</title><room><name>X</name><description>D</description></room></world>";
        let err = StoryDocument::parse(input, StoryFormat::Xml).unwrap_err();
        assert!(matches!(err, SourceError::Xml(_)));
    }

    #[test]
    fn test_parse_toml() {
        let input = r#"
title = "SpaceWalk"

[[room]]
name = "Airlock"
id = 1
description = "The outer door hisses."
connections = { id = [2] }

[[room.inventory.object]]
name = "Helmet"
id = 100
description = "Scratched visor."

[[room]]
name = "Corridor"
id = 2
description = "Lights flicker overhead."
"#;
        let document = StoryDocument::parse(input, StoryFormat::Toml).unwrap();

        assert_eq!(document.title, "SpaceWalk");
        assert_eq!(document.rooms.len(), 2);
        assert_eq!(document.rooms[0].inventory.objects[0].name, "Helmet");
        assert_eq!(document.rooms[0].connections.ids, vec![RoomId(2)]);
        assert!(document.rooms[1].connections.ids.is_empty());
    }

    #[test]
    fn test_parse_json() {
        let input = r#"{
            "title": "SpaceWalk",
            "room": [
                {
                    "name": "Airlock",
                    "id": 1,
                    "description": "The outer door hisses.",
                    "connections": { "id": [1] }
                }
            ]
        }"#;
        let document = StoryDocument::parse(input, StoryFormat::Json).unwrap();

        assert_eq!(document.rooms[0].connections.ids, vec![RoomId(1)]);
        assert!(document.rooms[0].inventory.objects.is_empty());
    }

    #[test]
    fn test_parse_json_missing_object_name() {
        let input = r#"{"room": [{"name": "A", "id": 1, "description": "",
            "inventory": {"object": [{"id": 5, "description": ""}]}}]}"#;
        let err = StoryDocument::parse(input, StoryFormat::Json).unwrap_err();
        assert!(matches!(err, SourceError::Json(_)));
    }

    #[test]
    fn test_has_title() {
        let mut document = StoryDocument::default();
        assert!(!document.has_title());
        document.title = "  ".to_string();
        assert!(!document.has_title());
        document.title = "SpaceWalk".to_string();
        assert!(document.has_title());
    }
}
