use std::io::Read;

use volcanium::graph::ValveGraph;
use volcanium::scenario::{solve, Agents, Scenario};

const START_VALVE: &str = "AA";

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    let (_remaining, records) =
        parser::parse_input(&buffer).map_err(|e| e.map_input(str::to_owned))?;

    let graph = ValveGraph::build(records)?;

    let scenarios = [
        Scenario {
            start_valve: START_VALVE.to_owned(),
            time_budget: 30,
            agents: Agents::One,
        },
        Scenario {
            start_valve: START_VALVE.to_owned(),
            time_budget: 26,
            agents: Agents::Two,
        },
    ];

    for scenario in &scenarios {
        println!("{}", solve(&graph, scenario)?);
    }

    Ok(())
}

mod parser {
    use volcanium::graph::Valve;

    use nom::{
        branch::alt,
        bytes::complete::tag,
        character::complete::{alpha1, line_ending, u64 as flow_rate},
        combinator::eof,
        multi::{many0, separated_list1},
        sequence::{preceded, terminated, tuple},
        IResult, Parser,
    };

    fn valve_fields(input: &str) -> IResult<&str, (Valve, Vec<&str>)> {
        tuple((
            preceded(tag("Valve "), alpha1::<&str, nom::error::Error<&str>>),
            preceded(tag(" has flow rate="), flow_rate),
            preceded(
                alt((
                    tag("; tunnels lead to valves "),
                    tag("; tunnel leads to valve "),
                )),
                separated_list1(tag(", "), alpha1),
            ),
        ))
        .map(|(name, flow_rate, tunnels)| {
            (
                Valve {
                    name: name.to_owned(),
                    flow_rate,
                },
                tunnels,
            )
        })
        .parse(input)
    }

    pub(super) fn parse_input(input: &str) -> IResult<&str, Vec<(Valve, Vec<&str>)>> {
        terminated(
            separated_list1(line_ending, valve_fields),
            tuple((many0(line_ending), eof)),
        )
        .parse(input)
    }

}
