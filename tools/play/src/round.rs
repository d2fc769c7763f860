use atlasly::Catalog;
use atlasly::catalog::{PlayableEntry, format_population};
use atlasly::game::bonus::{BonusAnswers, BonusChallenge, bonus_challenges};
use atlasly::game::{GameSession, GameStatus, GuessOutcome, compass_arrow, heat_square};
use rand::Rng;
use std::io;
use tokio::io::{AsyncBufRead, Lines};

/// Maps a typed line to an option: a 1-based number picks from the list,
/// anything else is taken as typed.
fn pick_option(line: &str, options: &[String]) -> String {
    match line.trim().parse::<usize>() {
        Ok(n) if (1..=options.len()).contains(&n) => options[n - 1].clone(),
        _ => line.trim().to_string(),
    }
}

fn print_options(options: &[String]) {
    for (i, option) in options.iter().enumerate() {
        println!("  {}. {}", i + 1, option);
    }
}

/// Reads guesses until the round is over or input ends.
pub async fn play_round<R>(
    session: &mut GameSession,
    input: &mut Lines<R>,
    easy_options: Option<&[String]>,
) -> io::Result<GameStatus>
where
    R: AsyncBufRead + Unpin,
{
    if let Some(options) = easy_options {
        println!("Which country is it?");
        print_options(options);
    }
    println!("Guess the country ({} tries).", session.remaining_guesses());

    while !session.status().is_over() {
        let Some(line) = input.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }
        let text = match easy_options {
            Some(options) => pick_option(&line, options),
            None => line,
        };

        let result = session.submit_guess(&text);
        match &result.outcome {
            GuessOutcome::Accepted { guess } => println!(
                "{} {} {:>6} km  {:>3}%  {}",
                heat_square(guess.proximity_percent),
                compass_arrow(guess.bearing_degrees),
                guess.distance_km,
                guess.proximity_percent,
                guess.resolved_name
            ),
            GuessOutcome::Unrecognized => println!("Unknown country, try again."),
            GuessOutcome::Duplicate { resolved_name } => println!("Already guessed {resolved_name}."),
            GuessOutcome::Rejected => break,
        }
    }

    match session.status() {
        GameStatus::Won => println!("Solved in {}!", session.guesses().len()),
        GameStatus::Lost => println!("Out of guesses. It was {}.", session.target()),
        GameStatus::Playing => {}
    }
    Ok(session.status())
}

fn print_facts(entry: &PlayableEntry) {
    let Some(facts) = &entry.facts else {
        return;
    };
    let region = match (&facts.region, &facts.subregion) {
        (Some(region), Some(sub)) => format!("{region} / {sub}"),
        (Some(region), None) => region.clone(),
        _ => "—".to_string(),
    };
    println!(
        "{} {}  capital: {}  population: {}  region: {}",
        facts.flag_emoji.as_deref().unwrap_or(""),
        entry.display_name,
        facts.capital.as_deref().unwrap_or("—"),
        format_population(facts.population),
        region
    );
}

fn ask(challenge: &BonusChallenge) {
    match challenge {
        BonusChallenge::Flag { flag_emoji, flag_url, .. } => {
            let flag = flag_emoji.as_deref().or(flag_url.as_deref()).unwrap_or("?");
            println!("Whose flag is this? {flag}");
        }
        BonusChallenge::Capital { country, .. } => println!("What is the capital of {country}?"),
        BonusChallenge::Neighbor { country, .. } => println!("Which country borders {country}?"),
    }
    print_options(challenge.options());
}

/// Bonus questions after a win. Returns the answers given.
pub async fn play_bonus<R, G>(
    catalog: &Catalog,
    target: &PlayableEntry,
    input: &mut Lines<R>,
    rng: &mut G,
) -> io::Result<BonusAnswers>
where
    R: AsyncBufRead + Unpin,
    G: Rng + ?Sized,
{
    print_facts(target);

    let challenges = bonus_challenges(catalog, target, rng);
    let mut answers = BonusAnswers::default();
    if challenges.is_empty() {
        return Ok(answers);
    }

    println!();
    println!("Bonus round!");
    for challenge in &challenges {
        ask(challenge);
        let Some(line) = input.next_line().await? else {
            break;
        };
        let answer = pick_option(&line, challenge.options());
        match answers.answer(challenge, &answer) {
            Some(true) => println!("Correct!"),
            Some(false) => println!("Wrong, it was {}.", challenge.correct()),
            None => {}
        }
    }
    println!("Bonus score: {}/{}", answers.score(), challenges.len());
    Ok(answers)
}
