//! Line-oriented text menu driving the gym operations
//!
//! The menu reads one answer per line and writes prompts and reports to its output. Closing the
//! input behaves like choosing "Exit".

use std::io::{self, BufRead, Write};
use std::num::ParseIntError;

use tower::{Service, ServiceExt};

use crate::{
    commands::{
        self, AddTrainerRequest, CheckPaymentRequest, ErrorKind, GymLogic, ListMembersRequest,
        ListTrainersRequest, PayRequest, RegisterMemberRequest, RegistryStatusRequest,
        SetActiveRequest,
    },
    domain::{Activation, PersonId},
    ports::{member::MemberPort, trainer::TrainerPort},
};

const MENU: &str = "\n--- Gym Management Menu ---
1. Register Member
2. View Members
3. Add Trainer
4. View Trainers
5. Make Payment
6. Deactivate Member
7. Activate Member
8. Exit";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An id or a menu choice that is not a number
    #[error("Enter a number only!")]
    MalformedInput(#[from] ParseIntError),
    #[error(transparent)]
    Gym(#[from] commands::Error),
    #[error("input closed")]
    InputClosed,
    #[error(transparent)]
    Io(#[from] io::Error),
}

enum Flow {
    Continue,
    Exit,
}

pub struct Menu<M, T, R, W> {
    logic: GymLogic<M, T>,
    input: R,
    output: W,
}

impl<M, T, R, W> Menu<M, T, R, W>
where
    M: MemberPort + 'static,
    T: TrainerPort + 'static,
    R: BufRead,
    W: Write,
{
    pub fn new(logic: GymLogic<M, T>, input: R, output: W) -> Self {
        Self {
            logic,
            input,
            output,
        }
    }

    /// Run until the user exits or the input is exhausted
    ///
    /// Only output failures end the loop early, every other failure is reported and the menu is
    /// shown again.
    pub async fn run(&mut self) -> io::Result<()> {
        loop {
            match self.step().await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) | Err(Error::InputClosed) => {
                    writeln!(self.output, "Thanks for using the system!")?;
                    return self.output.flush();
                }
                Err(Error::Io(err)) => return Err(err),
                Err(Error::Gym(err)) => {
                    tracing::debug!(kind = ?err.kind(), "operation failed: {err}");
                    match err.kind() {
                        ErrorKind::CapacityExceeded | ErrorKind::NotFound => {
                            writeln!(self.output, "{err}")?
                        }
                        ErrorKind::InvalidOperation | ErrorKind::Adapter => {
                            writeln!(self.output, "Error: {err}")?
                        }
                    }
                }
                Err(err @ Error::MalformedInput(_)) => writeln!(self.output, "{err}")?,
            }
        }
    }

    async fn step(&mut self) -> Result<Flow, Error> {
        writeln!(self.output, "{MENU}")?;
        let choice: i32 = self.prompt("Choice: ")?.trim().parse()?;

        match choice {
            1 => self.register_member().await?,
            2 => self.view_members().await?,
            3 => self.add_trainer().await?,
            4 => self.view_trainers().await?,
            5 => self.make_payment().await?,
            6 => self.set_active(false).await?,
            7 => self.set_active(true).await?,
            8 => return Ok(Flow::Exit),
            _ => writeln!(self.output, "Invalid option. Try again.")?,
        }

        Ok(Flow::Continue)
    }

    async fn register_member(&mut self) -> Result<(), Error> {
        if self.dispatch(RegistryStatusRequest).await?.members_full {
            writeln!(self.output, "Can't register more members.")?;
            return Ok(());
        }
        let name = self.prompt("Enter member name: ")?;
        let membership_type = self.prompt("Membership Type (Basic/Premium): ")?;

        let member = self
            .dispatch(RegisterMemberRequest {
                name,
                membership_type,
            })
            .await?;
        writeln!(self.output, "{}", member.greeting())?;
        writeln!(self.output, "Member added.")?;
        Ok(())
    }

    async fn view_members(&mut self) -> Result<(), Error> {
        let members = self.dispatch(ListMembersRequest).await?;
        if members.is_empty() {
            writeln!(self.output, "No members yet.")?;
        }
        for member in members {
            writeln!(self.output, "{member}")?;
        }
        Ok(())
    }

    async fn add_trainer(&mut self) -> Result<(), Error> {
        if self.dispatch(RegistryStatusRequest).await?.trainers_full {
            writeln!(self.output, "Can't add more trainers.")?;
            return Ok(());
        }
        let name = self.prompt("Trainer name: ")?;
        let specialization = self.prompt("Specialization: ")?;

        let trainer = self
            .dispatch(AddTrainerRequest {
                name,
                specialization,
            })
            .await?;
        writeln!(self.output, "{}", trainer.greeting())?;
        writeln!(self.output, "Trainer added.")?;
        Ok(())
    }

    async fn view_trainers(&mut self) -> Result<(), Error> {
        let trainers = self.dispatch(ListTrainersRequest).await?;
        if trainers.is_empty() {
            writeln!(self.output, "No trainers added yet.")?;
        }
        for trainer in trainers {
            writeln!(self.output, "{trainer}")?;
        }
        Ok(())
    }

    async fn make_payment(&mut self) -> Result<(), Error> {
        // Don't ask for an id when nobody can pay
        if self.dispatch(RegistryStatusRequest).await?.member_count == 0 {
            return Err(commands::Error::NoMembersRegistered.into());
        }
        let member_id = self.prompt_id("Enter Member ID: ")?;
        // Only an eligible member gets asked for a payment method
        self.dispatch(CheckPaymentRequest { member_id }).await?;
        let method = self.prompt("Payment Method (Cash/UPI/Card): ")?;

        let payment = self.dispatch(PayRequest { member_id, method }).await?;
        writeln!(self.output, "Processing payment...")?;
        writeln!(self.output, "{payment}")?;
        Ok(())
    }

    async fn set_active(&mut self, active: bool) -> Result<(), Error> {
        let text = if active {
            "Enter Member ID to activate: "
        } else {
            "Enter Member ID to deactivate: "
        };
        let member_id = self.prompt_id(text)?;

        let res = self.dispatch(SetActiveRequest { member_id, active }).await?;
        let report = match res.activation {
            Activation::Activated => "Member activated successfully.",
            Activation::AlreadyActive => "Member is already active.",
            Activation::Deactivated => "Member deactivated.",
        };
        writeln!(self.output, "{report}")?;
        Ok(())
    }

    async fn dispatch<Req>(
        &mut self,
        req: Req,
    ) -> Result<<GymLogic<M, T> as Service<Req>>::Response, commands::Error>
    where
        GymLogic<M, T>: Service<Req, Error = commands::Error>,
    {
        (&mut self.logic).oneshot(req).await
    }

    fn prompt(&mut self, text: &str) -> Result<String, Error> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn prompt_id(&mut self, text: &str) -> Result<PersonId, Error> {
        Ok(self.prompt(text)?.trim().parse()?)
    }
}
