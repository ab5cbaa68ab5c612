use anyhow::Result;

use showcase_core::Roster;

pub fn run(roster: &Roster) -> Result<()> {
    println!("Characters ({}):\n", roster.len());

    for (index, character) in roster.characters.iter().enumerate() {
        let initial = if index == roster.initial_character {
            " [initial]"
        } else {
            ""
        };
        println!(
            "  {} {} ({}){}",
            character.icon, character.name, character.eng_name, initial
        );

        for (t_index, form) in character.transformations.iter().enumerate() {
            let marker = if t_index == character.default_transformation {
                "*"
            } else {
                " "
            };
            println!("   {} {} {} - {}", marker, form.icon, form.name, form.artwork);
            println!("       \"{}\"", form.quote);
        }
        println!();
    }

    Ok(())
}
