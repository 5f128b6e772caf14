use crate::params::NetworkParams;
use crate::{ValidationError, VoteChoices};
use tracing::{debug, warn};

/// Returns an error if any vote choice is not valid for the agendas of the
/// given vote version.
///
/// Entries are checked in key order and the first invalid one is reported.
pub fn validate_vote_choices(
    params: &NetworkParams,
    vote_version: u32,
    vote_choices: &VoteChoices,
) -> Result<(), ValidationError> {
    let agendas = params.agendas(vote_version);

    for (agenda_id, choice_id) in vote_choices {
        let Some(agenda) = agendas.iter().find(|a| &a.id == agenda_id) else {
            warn!("Vote choice for unknown agenda {agenda_id:?} (vote version {vote_version})");
            return Err(ValidationError::UnknownAgenda {
                agenda: agenda_id.clone(),
                vote_version,
            });
        };

        if agenda.choice(choice_id).is_none() {
            warn!("Unknown choice {choice_id:?} for agenda {agenda_id:?}");
            return Err(ValidationError::UnknownChoice {
                choice: choice_id.clone(),
                agenda: agenda_id.clone(),
            });
        }
    }

    debug!("{} vote choices valid for vote version {vote_version}", vote_choices.len());
    Ok(())
}
