use darling::{ ast::NestedMeta, FromMeta };
use proc_macro::TokenStream;

#[derive(Default, FromMeta)]
#[darling(default)]
struct CommandArgs {
	no_dm: bool,
	rename: Option<String>,
	description: Option<String>,
	default_member_permissions: Option<String>
}

fn wrap_option<T: quote::ToTokens>(literal: Option<T>) -> syn::Expr {
	match literal {
		Some(literal) => syn::parse_quote! { Some(#literal.into()) },
		None => syn::parse_quote! { None }
	}
}

/// Turns `async fn name(context: Context, interaction: Interaction) -> Result<CommandResponse>`
/// into `fn name() -> crate::Command` describing the slash command.
#[proc_macro_attribute]
pub fn command(args: TokenStream, function: TokenStream) -> TokenStream {
	let args = match NestedMeta::parse_meta_list(args.into()) {
		Ok(args) => args,
		Err(error) => return TokenStream::from(darling::Error::from(error).write_errors())
	};
	let args = match CommandArgs::from_list(&args) {
		Ok(args) => args,
		Err(error) => return TokenStream::from(error.write_errors())
	};
	let mut function = syn::parse_macro_input!(function as syn::ItemFn);

	let command_name = args.rename.unwrap_or_else(|| function
		.sig
		.ident
		.to_string()
		.trim_start_matches("r#")
		.to_string()
	);

	let function_ident =
		std::mem::replace(&mut function.sig.ident, syn::parse_quote! { inner });
	let function_generics = &function.sig.generics;
	let function_visibility = &function.vis;
	let function = &function;

	let no_dm = args.no_dm;
	let description = wrap_option(args.description);
	let default_member_permissions = wrap_option(args.default_member_permissions);
	TokenStream::from(quote::quote! {
		#function_visibility fn #function_ident #function_generics() -> crate::Command {
			#function
			crate::Command {
				name: #command_name.into(),
				no_dm: #no_dm,
				handler: |context, interaction| -> crate::BoxFuture<'static, crate::Result<crate::CommandResponse>> {
					Box::pin(inner(context, interaction))
				},
				description: #description,
				default_member_permissions: #default_member_permissions,
				options: Vec::new()
			}
		}
	})
}
