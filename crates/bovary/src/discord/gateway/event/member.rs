use twilight_model::gateway::payload::incoming::{ MemberAdd, MemberRemove };

use crate::{
	server::logging::{ send_log, ServerLog },
	Result, Context
};

pub async fn member_add(context: Context, member_add: MemberAdd) -> Result<()> {
	send_log(&context, member_add.guild_id, ServerLog::MemberJoined {
		user_name: member_add.member.user.name.clone()
	}).await
}

pub async fn member_remove(context: Context, member_remove: MemberRemove) -> Result<()> {
	send_log(&context, member_remove.guild_id, ServerLog::MemberLeft {
		user_name: member_remove.user.name
	}).await
}
