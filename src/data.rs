// src/data.rs

use crate::model::Difficulty;
use serde::Deserialize;
use serde_yaml;

#[derive(Deserialize, Debug, Clone)]
pub struct DifficultyInfo {
    pub id: Difficulty,
    pub name: String,
    pub emoji: String,
    /// Tipo de conectores que el texto debe practicar
    pub connectives: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Catalog {
    pub difficulties: Vec<DifficultyInfo>,
    pub themes: Vec<String>,
}

impl Catalog {
    pub fn difficulty(&self, id: Difficulty) -> Option<&DifficultyInfo> {
        self.difficulties.iter().find(|d| d.id == id)
    }
}

/// Carga el catálogo de dificultades y temas desde el YAML embebido
pub fn read_catalog_embedded() -> Catalog {
    let file_content = include_str!("data/catalog.yaml");
    serde_yaml::from_str(file_content).expect("No se pudo parsear el catálogo YAML")
}
