//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use calamine::{Data, Range};

/// A cut-down RDLS schema covering the shapes the generator handles:
/// root scalars, a closed-enum scalar array, an open codelist, `date`
/// and `iri` formats, arrays of objects, nesting through `$defs`, and
/// two risk components.
pub fn sample_schema_json() -> &'static str {
    r##"{
        "$id": "https://example.org/rdls_schema.json",
        "type": "object",
        "required": ["id", "title", "risk_data_type"],
        "properties": {
            "id": {
                "type": "string",
                "title": "Identifier",
                "description": "A unique identifier for the dataset."
            },
            "title": {
                "type": "string",
                "title": "Title",
                "description": "A short title for the dataset."
            },
            "risk_data_type": {
                "title": "Risk data type",
                "description": "The components of risk the dataset contains.",
                "type": "array",
                "codelist": "risk_data_type.csv",
                "openCodelist": false,
                "items": {
                    "type": "string",
                    "enum": ["hazard", "exposure", "vulnerability", "loss"]
                }
            },
            "publication_date": {
                "type": "string",
                "title": "Publication date",
                "description": "The date the dataset was first published.",
                "format": "date"
            },
            "license": {
                "type": "string",
                "title": "License",
                "description": "The license the dataset is published under.",
                "codelist": "license.csv",
                "openCodelist": true
            },
            "resources": {
                "title": "Resources",
                "description": "The files the dataset is distributed through.",
                "type": "array",
                "items": {
                    "type": "object",
                    "required": ["id"],
                    "properties": {
                        "id": {
                            "type": "string",
                            "title": "Resource identifier",
                            "description": "A unique identifier for the resource."
                        },
                        "url": {
                            "type": "string",
                            "title": "URL",
                            "description": "The address the resource can be downloaded from.",
                            "format": "iri"
                        },
                        "bytes": {
                            "type": "integer",
                            "title": "Byte size",
                            "description": "The size of the resource file in bytes."
                        }
                    }
                }
            },
            "hazard": {
                "title": "Hazard metadata",
                "description": "Metadata about the hazard component of the dataset.",
                "type": "object",
                "properties": {
                    "event_sets": {
                        "title": "Event sets",
                        "description": "The sets of hazard events the dataset describes.",
                        "type": "array",
                        "items": {"$ref": "#/$defs/EventSet"}
                    }
                }
            },
            "exposure": {
                "title": "Exposure metadata",
                "description": "Metadata about the exposure component of the dataset.",
                "type": "object",
                "properties": {
                    "category": {
                        "type": "string",
                        "title": "Exposure category",
                        "description": "The category of assets the dataset describes."
                    }
                }
            },
            "links": {
                "title": "Links",
                "description": "References to related documents and standards.",
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "href": {
                            "type": "string",
                            "title": "Link target",
                            "description": "The address of the related document.",
                            "format": "iri"
                        },
                        "rel": {
                            "type": "string",
                            "title": "Link relation",
                            "description": "How the document relates to the dataset."
                        }
                    }
                }
            }
        },
        "$defs": {
            "EventSet": {
                "type": "object",
                "required": ["id"],
                "properties": {
                    "id": {
                        "type": "string",
                        "title": "Event set identifier",
                        "description": "A unique identifier for the event set."
                    },
                    "analysis_type": {
                        "type": "string",
                        "title": "Analysis type",
                        "description": "Whether the event set is probabilistic or deterministic.",
                        "enum": ["probabilistic", "deterministic"]
                    },
                    "frequency": {
                        "type": "number",
                        "title": "Frequency",
                        "description": "The annual frequency of occurrence of the event set."
                    },
                    "events": {
                        "title": "Events",
                        "description": "The events in the event set.",
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "id": {
                                    "type": "string",
                                    "title": "Event identifier",
                                    "description": "A unique identifier for the event."
                                },
                                "calculation_method": {
                                    "type": "string",
                                    "title": "Calculation method",
                                    "description": "How the event footprint was calculated."
                                }
                            }
                        }
                    }
                }
            }
        }
    }"##
}

/// Write the sample schema into `dir` and return its path.
pub fn write_sample_schema(dir: &Path) -> PathBuf {
    let path = dir.join("rdls_schema.json");
    fs::write(&path, sample_schema_json()).expect("schema fixture should be writable");
    path
}

/// Write a codelist directory holding the open `license.csv` codelist
/// and return its path.
pub fn write_codelists(dir: &Path) -> PathBuf {
    let codelists = dir.join("codelists");
    fs::create_dir_all(&codelists).expect("codelist dir should be creatable");
    fs::write(
        codelists.join("license.csv"),
        "Code,Title\nCC-BY-4.0,Creative Commons Attribution 4.0\nODbL-1.0,Open Database License 1.0\n",
    )
    .expect("codelist fixture should be writable");
    codelists
}

/// The text of a cell, with missing and blank cells rendered as `""`.
pub fn cell_text(range: &Range<Data>, row: u32, col: u32) -> String {
    match range.get_value((row, col)) {
        Some(Data::String(text)) => text.clone(),
        _ => String::new(),
    }
}
