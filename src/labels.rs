// User-facing strings. Italian is the default.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    It,
    En,
}

pub struct Labels {
    pub title: &'static str,
    pub instructions: &'static str,
    pub button: &'static str,
    pub loading: &'static str,
    pub result_heading: &'static str,
    pub number_prefix: &'static str,
    pub counter_prefix: &'static str,
    pub notice_title: &'static str,
    pub notice_text: &'static str,
    pub notice_hint: &'static str,
    pub footer: &'static str,
}

const IT: Labels = Labels {
    title: "Estrazione Studente",
    instructions: "Premi il pulsante per estrarre uno studente",
    button: "Estrai Studente",
    loading: "Estrazione in corso...",
    result_heading: "Studente estratto:",
    number_prefix: "N°",
    counter_prefix: "Studenti estratti",
    notice_title: "Completato",
    notice_text: "Tutti gli studenti sono stati interrogati!",
    notice_hint: "Invio per chiudere",
    footer: "Invio/Spazio Estrai | q Esci",
};

const EN: Labels = Labels {
    title: "Student Draw",
    instructions: "Press the button to draw a student",
    button: "Draw Student",
    loading: "Drawing...",
    result_heading: "Student drawn:",
    number_prefix: "No.",
    counter_prefix: "Students drawn",
    notice_title: "Completed",
    notice_text: "Every student has been called!",
    notice_hint: "Enter to close",
    footer: "Enter/Space Draw | q Quit",
};

impl Labels {
    pub fn for_lang(lang: Lang) -> &'static Labels {
        match lang {
            Lang::It => &IT,
            Lang::En => &EN,
        }
    }

    pub fn counter(&self, picked: usize, total: usize) -> String {
        format!("{}: {}/{}", self.counter_prefix, picked, total)
    }

    pub fn number(&self, number: usize) -> String {
        format!("({} {})", self.number_prefix, number)
    }
}
