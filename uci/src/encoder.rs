use super::commands::{Score, UciOutput};

pub struct Encoder {}

impl Encoder {
    pub fn encode(&self, response: &UciOutput) -> String {
        match response {
            UciOutput::IdName(name) => format!("id name {}", name),
            UciOutput::IdAuthor(author) => format!("id author {}", author),

            UciOutput::UciOk => "uciok".to_string(),
            UciOutput::ReadyOk => "readyok".to_string(),

            UciOutput::BestMove(best_move) => format!("bestmove {}", best_move),
            UciOutput::Info(info) => {
                format!(
                    "info depth {} score {} nodes {} nps {} time {} pv {}",
                    info.depth,
                    match info.score {
                        Score::Centipawns(cp) => format!("cp {}", cp),
                        Score::Mate(moves) => format!("mate {}", moves),
                    },
                    info.nodes,
                    info.nodes_per_second,
                    info.time,
                    info.pv.join(" ")
                )
            }
            UciOutput::Option(option_str) => option_str.clone(),
            UciOutput::Raw(message) => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Info;

    #[test]
    fn test_encode_info_with_mate() {
        let info = Info {
            depth: 4,
            nodes: 1200,
            nodes_per_second: 60000,
            time: 20,
            pv: vec!["b7b2".to_string()],
            score: Score::Mate(-2),
        };
        assert_eq!(
            Encoder {}.encode(&UciOutput::Info(info)),
            "info depth 4 score mate -2 nodes 1200 nps 60000 time 20 pv b7b2"
        );
    }

    #[test]
    fn test_encode_bestmove() {
        let out = UciOutput::BestMove("e2e4".to_string());
        assert_eq!(Encoder {}.encode(&out), "bestmove e2e4");
    }
}
