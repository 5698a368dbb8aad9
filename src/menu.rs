// Interactive menu over the catalog search and the favorites store

use std::io::{self, Write};

use crate::catalog::{parse_max_cost, Catalog, Destination, SearchCriteria};
use crate::favorites::{FavoritesStore, SaveOutcome};

// Menu loop wiring the catalog and the favorites store to the terminal.
// All logic lives in the two collaborators; this only prompts and prints.
pub struct Menu {
    catalog: Catalog,
    favorites: FavoritesStore,
}

impl Menu {
    pub fn new(catalog: Catalog, favorites: FavoritesStore) -> Self {
        Self { catalog, favorites }
    }

    // Run the menu until the user picks exit or stdin is closed
    pub fn run(&self) -> io::Result<()> {
        loop {
            show_menu();

            let Some(choice) = prompt("Choose an option (1-6): ")? else {
                break;
            };

            match choice.as_str() {
                "1" => self.search_by_destination()?,
                "2" => self.search_by_budget()?,
                "3" => self.search_by_keyword()?,
                "4" => self.multi_criteria_search()?,
                "5" => self.view_favorites(),
                "6" => {
                    println!("Exiting... Goodbye!");
                    break;
                }
                _ => println!("Invalid choice. Try again."),
            }
        }

        Ok(())
    }

    fn search_by_destination(&self) -> io::Result<()> {
        let Some(name) = prompt("Enter destination name: ")? else {
            return Ok(());
        };

        let results = self.catalog.search(&SearchCriteria::by_name(name));
        self.print_results(&results)
    }

    fn search_by_budget(&self) -> io::Result<()> {
        let Some(input) = prompt("Enter your maximum budget: ")? else {
            return Ok(());
        };

        // blank input is an error here, not a wildcard; the prompt asked for
        // a number
        let budget = match parse_max_cost(&input) {
            Ok(Some(budget)) => budget,
            Ok(None) | Err(_) => {
                println!("Please enter a valid number.");
                return Ok(());
            }
        };

        let results = self.catalog.search(&SearchCriteria::by_max_cost(budget));
        self.print_results(&results)
    }

    fn search_by_keyword(&self) -> io::Result<()> {
        let Some(keyword) = prompt("Enter a travel keyword (e.g., beach, romantic, city): ")?
        else {
            return Ok(());
        };

        let results = self.catalog.search(&SearchCriteria::by_keyword(keyword));
        self.print_results(&results)
    }

    fn multi_criteria_search(&self) -> io::Result<()> {
        let Some(name) = prompt("Enter destination name (or leave blank): ")? else {
            return Ok(());
        };
        let Some(keyword) = prompt("Enter keyword (or leave blank): ")? else {
            return Ok(());
        };
        let Some(budget_input) = prompt("Enter max budget (or leave blank): ")? else {
            return Ok(());
        };

        let max_cost = match parse_max_cost(&budget_input) {
            Ok(max_cost) => max_cost,
            Err(_) => {
                println!("Invalid budget input.");
                return Ok(());
            }
        };

        let criteria = SearchCriteria {
            name: Some(name),
            max_cost,
            keyword: Some(keyword),
        };

        let results = self.catalog.search(&criteria);
        self.print_results(&results)
    }

    fn view_favorites(&self) {
        match self.favorites.load() {
            Ok(favorites) if favorites.is_empty() => println!("No saved trips."),
            Ok(favorites) => {
                println!("\nYour Saved Favorite Destinations:");
                for dest in &favorites {
                    println!("{dest}");
                }
            }
            Err(e) => println!("Could not load favorites: {e}"),
        }
    }

    // Print a numbered result listing and offer to save entries to favorites
    fn print_results(&self, results: &[Destination]) -> io::Result<()> {
        if results.is_empty() {
            println!("No results found.");
            return Ok(());
        }

        println!("\nMatching destinations:");
        for (index, dest) in results.iter().enumerate() {
            println!("{}. {}", index + 1, dest);
        }

        let Some(selection) = prompt(
            "Enter the number(s) of trips to save to favorites (comma-separated), or press Enter to skip: ",
        )?
        else {
            return Ok(());
        };

        if selection.is_empty() {
            return Ok(());
        }

        match self.favorites.save_selection(results, &selection) {
            Ok(outcomes) => {
                for outcome in outcomes {
                    match outcome {
                        SaveOutcome::Saved(dest) => println!("Saved: {}", dest.destination),
                        SaveOutcome::Duplicate(dest) => {
                            println!("Already in favorites: {}", dest.destination)
                        }
                        SaveOutcome::InvalidIndex(token) => println!("Invalid index: {token}"),
                        SaveOutcome::InvalidInput(token) => println!("Invalid input: {token}"),
                    }
                }
            }
            Err(e) => println!("Could not update favorites: {e}"),
        }

        Ok(())
    }
}

fn show_menu() {
    println!("\n=== Travel Search Menu ===");
    println!("1. Search by destination");
    println!("2. Search by budget");
    println!("3. Search by keyword");
    println!("4. Multi-criteria search");
    println!("5. View favorites");
    println!("6. Exit");
}

// Prompt for one trimmed line. Returns None when stdin is closed.
fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
