//! Seed instruction for the grading conversation

/// The assistant turn that acknowledges the seed instruction
pub const ACKNOWLEDGEMENT: &str = "OK";

/// Build the instruction that opens every grading conversation.
///
/// The grader is told the expected answer, asked to tolerate spelling and
/// phrasing differences, never to reveal the answer, and to reply exactly
/// `YES` on a match.
pub fn seed_instruction(answer: &str) -> String {
    format!(
        "Olet trivia-botti. Minulta on kysytty kysymys, jonka vastaus on \"{answer}\". \
         Minä arvaan vastauksia ja sinä kerrot, menikö se oikein (Huom, saatan kirjoittaa \
         vastauksen hieman eri tavalla, se ei haittaa). Älä paljasta vastausta missään \
         tapauksessa. Jos vastaus on oikein, vastaa täsmälleen \"YES\", muussa tapauksessa \
         vastaa vapaalla tekstillä jotain. Jatketaan kunnes vastaus menee oikein. Vastaa \
         \"OK\" Jos ymmärsit."
    )
}
