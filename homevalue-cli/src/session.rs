//! Prompt-driven calculator session.
//!
//! Input lines are parsed into [`Action`]s and applied to a [`Session`], which
//! owns the property data and selection for the lifetime of the process.

use anyhow::{Context, Result, anyhow, bail};
use homevalue_core::{Area, Catalog, Condition, PropertyData, PropertyType, Selection, estimate};
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};

use crate::config::Config;
use crate::render::{format_currency, render_catalog, render_result};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Value(Decimal),
    SquareFeet(u32),
    Bedrooms(u32),
    Bathrooms(f64),
    YearBuilt(i32),
    Type(PropertyType),
    Rate(Area, Condition),
    Note(String),
    /// Catalog id or 1-based catalog number
    Toggle(String),
    List,
    Show,
    Calculate,
    Reset,
    Help,
    Quit,
}

pub fn parse_action(line: &str) -> Result<Action> {
    let line = line.trim();
    let (cmd, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    let action = match cmd.to_lowercase().as_str() {
        "value" => Action::Value(parse_amount(rest)?),
        "sqft" => Action::SquareFeet(rest.parse().context("square feet must be a whole number")?),
        "beds" | "bedrooms" => {
            Action::Bedrooms(rest.parse().context("bedrooms must be a whole number")?)
        }
        "baths" | "bathrooms" => {
            Action::Bathrooms(rest.parse().context("bathrooms must be a number")?)
        }
        "year" => Action::YearBuilt(rest.parse().context("year built must be a number")?),
        "type" => Action::Type(rest.parse()?),
        "rate" => {
            let (area, rating) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| anyhow!("usage: rate <area> <excellent|good|fair|poor>"))?;
            Action::Rate(area.parse()?, rating.parse()?)
        }
        "note" => Action::Note(rest.to_string()),
        "toggle" | "t" if !rest.is_empty() => Action::Toggle(rest.to_string()),
        "list" | "ls" => Action::List,
        "show" => Action::Show,
        "calc" | "calculate" => Action::Calculate,
        "reset" => Action::Reset,
        "help" | "?" => Action::Help,
        "quit" | "exit" | "q" => Action::Quit,
        "" => bail!("empty input"),
        // Bare number or id toggles
        _ if rest.is_empty() => Action::Toggle(cmd.to_string()),
        other => bail!("unknown command: {other} (try 'help')"),
    };
    Ok(action)
}

/// Accepts "300000", "300,000", "$300,000.50"
fn parse_amount(s: &str) -> Result<Decimal> {
    let cleaned: String = s.chars().filter(|c| !matches!(c, '$' | ',' | '_' | ' ')).collect();
    cleaned
        .parse::<Decimal>()
        .with_context(|| format!("not a valid amount: '{s}'"))
}

pub struct Session<'a> {
    catalog: &'a Catalog,
    config: &'a Config,
    pub property: PropertyData,
    pub selection: Selection,
}

impl<'a> Session<'a> {
    pub fn new(catalog: &'a Catalog, config: &'a Config) -> Self {
        Self {
            catalog,
            config,
            property: fresh_property(config),
            selection: Selection::new(),
        }
    }

    /// Apply one action, returning text to show. `None` means quit.
    pub fn apply(&mut self, action: Action) -> Result<Option<String>> {
        let config = self.config;
        let sym = &config.display.currency_symbol;
        let msg = match action {
            Action::Value(v) => {
                self.property.current_value = v;
                format!("Current value: {}", format_currency(v, sym))
            }
            Action::SquareFeet(n) => {
                self.property.square_feet = n;
                format!("Square feet: {n}")
            }
            Action::Bedrooms(n) => {
                self.property.bedrooms = n;
                format!("Bedrooms: {n}")
            }
            Action::Bathrooms(n) => {
                self.property.bathrooms = n;
                format!("Bathrooms: {n}")
            }
            Action::YearBuilt(y) => {
                self.property.year_built = y;
                format!("Year built: {y}")
            }
            Action::Type(t) => {
                self.property.property_type = t;
                format!("Property type: {t}")
            }
            Action::Rate(area, condition) => {
                self.property.conditions.set(area, condition);
                format!("{area} condition: {condition}")
            }
            Action::Note(text) => {
                self.property.notes = text;
                "Notes updated".to_string()
            }
            Action::Toggle(key) => self.toggle(&key)?,
            Action::List => self.list(),
            Action::Show => self.show(),
            Action::Calculate => match estimate(self.catalog, &self.selection, &self.property) {
                Ok(result) => render_result(&result, &self.property, &config.display),
                Err(e) => {
                    tracing::debug!(error = %e, "estimate rejected");
                    e.user_message().to_string()
                }
            },
            Action::Reset => {
                self.property = fresh_property(config);
                self.selection.clear();
                "Calculator reset".to_string()
            }
            Action::Help => HELP.to_string(),
            Action::Quit => return Ok(None),
        };
        Ok(Some(msg))
    }

    fn resolve(&self, key: &str) -> Result<&'a str> {
        let catalog = self.catalog;
        if let Ok(n) = key.parse::<usize>() {
            return catalog
                .all()
                .get(n.wrapping_sub(1))
                .map(|r| r.id.as_str())
                .ok_or_else(|| anyhow!("no improvement numbered {n} (1-{})", catalog.len()));
        }
        catalog
            .get(key)
            .map(|r| r.id.as_str())
            .ok_or_else(|| anyhow!("unknown improvement: {key}"))
    }

    fn toggle(&mut self, key: &str) -> Result<String> {
        let id = self.resolve(key)?;
        let title = self.catalog.get(id).map(|r| r.title.as_str()).unwrap_or(id);
        let msg = if self.selection.toggle(id) {
            format!("Selected {title}")
        } else {
            format!("Deselected {title}")
        };
        Ok(format!("{msg} ({} selected)", self.selection.len()))
    }

    fn list(&self) -> String {
        let mut out = String::new();
        for line in render_catalog(self.catalog, &self.config.display).lines() {
            // Mark selected cards
            let marked = self
                .catalog
                .all()
                .iter()
                .find(|r| line.ends_with(&format!("[{}]", r.id)))
                .is_some_and(|r| self.selection.contains(&r.id));
            out.push_str(if marked { "* " } else { "  " });
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    fn show(&self) -> String {
        let p = &self.property;
        let mut out = format!(
            "Value: {} | {} | {} sq ft | {} bd / {} ba | built {}\n",
            format_currency(p.current_value, &self.config.display.currency_symbol),
            p.property_type,
            p.square_feet,
            p.bedrooms,
            p.bathrooms,
            p.year_built,
        );
        let ratings: Vec<_> = Area::ALL
            .iter()
            .map(|a| format!("{a}={}", p.conditions.get(*a)))
            .collect();
        out.push_str(&format!("Conditions: {}\n", ratings.join(", ")));
        if !p.notes.is_empty() {
            out.push_str(&format!("Notes: {}\n", p.notes));
        }
        let ids: Vec<_> = self.selection.iter().collect();
        out.push_str(&format!(
            "Selected: {}",
            if ids.is_empty() { "(none)".to_string() } else { ids.join(", ") }
        ));
        out
    }
}

fn fresh_property(config: &Config) -> PropertyData {
    PropertyData::default().with_property_type(config.property.default_type)
}

const HELP: &str = "\
Commands:
  value <amount>          current home value
  sqft | beds | baths | year <n>
  type <single-family|condo|townhouse|multi-family>
  rate <kitchen|bathroom|flooring|exterior> <excellent|good|fair|poor>
  note <text>
  list                    show improvements (* = selected)
  <n> | <id>              toggle an improvement
  show                    current property + selection
  calc                    compute the estimate
  reset                   clear everything
  quit";

pub fn run_interactive(catalog: &Catalog, config: &Config) -> Result<()> {
    let mut session = Session::new(catalog, config);
    println!("Home value calculator (type 'help' for commands)\n");
    println!("{}", session.list());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush().ok();
        let Some(line) = lines.next() else { break };
        let line = line.context("read stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let outcome = parse_action(&line).and_then(|a| session.apply(a));
        match outcome {
            Ok(Some(msg)) => println!("{msg}"),
            Ok(None) => break,
            Err(e) => println!("error: {e:#}"),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_actions() {
        assert_eq!(parse_action("value $300,000").unwrap(), Action::Value(dec!(300000)));
        assert_eq!(parse_action("baths 2.5").unwrap(), Action::Bathrooms(2.5));
        assert_eq!(
            parse_action("rate kitchen poor").unwrap(),
            Action::Rate(Area::Kitchen, Condition::Poor)
        );
        assert_eq!(parse_action("4").unwrap(), Action::Toggle("4".into()));
        assert_eq!(parse_action("landscaping").unwrap(), Action::Toggle("landscaping".into()));
        assert_eq!(parse_action("CALC").unwrap(), Action::Calculate);
        assert!(parse_action("value lots").is_err());
        assert!(parse_action("frobnicate now").is_err());
    }

    #[test]
    fn test_session_toggle_and_calculate() {
        let config = Config::default();
        let mut s = Session::new(Catalog::builtin(), &config);

        s.apply(Action::Value(dec!(300000))).unwrap();
        s.apply(Action::Toggle("exterior-painting".into())).unwrap();
        s.apply(Action::Toggle("5".into())).unwrap();
        assert_eq!(s.selection.iter().collect::<Vec<_>>(), ["exterior-painting", "landscaping"]);

        let out = s.apply(Action::Calculate).unwrap().unwrap();
        assert!(out.contains("+3.17%"));
        assert!(out.contains("Average ROI:        106%"));
    }

    #[test]
    fn test_toggle_twice_deselects() {
        let config = Config::default();
        let mut s = Session::new(Catalog::builtin(), &config);
        s.apply(Action::Toggle("1".into())).unwrap();
        let msg = s.apply(Action::Toggle("kitchen-remodel".into())).unwrap().unwrap();
        assert!(msg.starts_with("Deselected Kitchen Remodel"));
        assert!(s.selection.is_empty());
    }

    #[test]
    fn test_unknown_toggle_is_error() {
        let config = Config::default();
        let mut s = Session::new(Catalog::builtin(), &config);
        assert!(s.apply(Action::Toggle("0".into())).is_err());
        assert!(s.apply(Action::Toggle("13".into())).is_err());
        assert!(s.apply(Action::Toggle("hot-tub".into())).is_err());
    }

    #[test]
    fn test_calculate_validates_like_the_form() {
        let config = Config::default();
        let mut s = Session::new(Catalog::builtin(), &config);
        s.apply(Action::Toggle("landscaping".into())).unwrap();
        let out = s.apply(Action::Calculate).unwrap().unwrap();
        assert_eq!(out, "Please enter a valid current home value");

        s.apply(Action::Toggle("landscaping".into())).unwrap();
        s.apply(Action::Value(dec!(200000))).unwrap();
        let out = s.apply(Action::Calculate).unwrap().unwrap();
        assert_eq!(out, "Please select at least one improvement");
    }

    #[test]
    fn test_calculate_with_out_of_range_value() {
        let config = Config::default();
        let mut s = Session::new(Catalog::builtin(), &config);
        s.apply(Action::Toggle("landscaping".into())).unwrap();
        s.apply(Action::Value(Decimal::MAX)).unwrap();
        let out = s.apply(Action::Calculate).unwrap().unwrap();
        assert_eq!(out, "Please enter a realistic current home value");
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut config = Config::default();
        config.property.default_type = PropertyType::Townhouse;
        let mut s = Session::new(Catalog::builtin(), &config);
        s.apply(Action::Value(dec!(500000))).unwrap();
        s.apply(Action::Rate(Area::Exterior, Condition::Fair)).unwrap();
        s.apply(Action::Toggle("2".into())).unwrap();

        s.apply(Action::Reset).unwrap();
        assert!(s.selection.is_empty());
        assert_eq!(s.property.current_value, Decimal::ZERO);
        assert_eq!(s.property.conditions.exterior, Condition::Good);
        assert_eq!(s.property.property_type, PropertyType::Townhouse);
    }

    #[test]
    fn test_list_marks_selected() {
        let config = Config::default();
        let mut s = Session::new(Catalog::builtin(), &config);
        s.apply(Action::Toggle("smart-home".into())).unwrap();
        let listing = s.list();
        assert!(listing.lines().any(|l| l.starts_with("* ") && l.contains("[smart-home]")));
        assert!(listing.lines().any(|l| l.starts_with("  ") && l.contains("[garage-door]")));
    }

    #[test]
    fn test_quit() {
        let config = Config::default();
        let mut s = Session::new(Catalog::builtin(), &config);
        assert!(s.apply(Action::Quit).unwrap().is_none());
    }
}
