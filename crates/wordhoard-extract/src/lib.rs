pub mod merriam;
pub mod text;
pub mod thesaurus;
